use crate::application::interface::RoomRepositoryTrait;
use chrono::NaiveTime;

pub fn show_available_now(room_repository: &dyn RoomRepositoryTrait, now: NaiveTime) {
    println!("\nRooms available now at {}:", now.format("%H:%M"));

    let rooms = room_repository.get_available_rooms_at(now);

    if rooms.is_empty() {
        println!("No rooms are free right now.");
    } else {
        for room in rooms.iter() {
            println!("{}", room.describe());
        }
    }

    println!();
}
