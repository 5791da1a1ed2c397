use crate::application::interface::RoomRepositoryTrait;

pub fn show_all_rooms(room_repository: &dyn RoomRepositoryTrait) {
    println!("\nAll rooms:");

    for room in room_repository.get_all_rooms().iter() {
        println!("{}", room.describe());
    }

    println!();
}
