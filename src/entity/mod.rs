pub mod room;
pub mod time_slot;
