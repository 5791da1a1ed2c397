use crate::application::interface::RoomRepositoryTrait;

pub fn show_study_tip(room_repository: &dyn RoomRepositoryTrait) {
    println!("\nStudy tip: {}\n", room_repository.suggest_study_tip());
}
