pub mod check_in_room;
pub mod check_out_room;
pub mod interface;
pub mod show_all_rooms;
pub mod show_available_now;
pub mod show_available_soon;
pub mod show_study_tip;
