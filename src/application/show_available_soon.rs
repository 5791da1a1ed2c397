use crate::application::interface::RoomRepositoryTrait;
use chrono::NaiveTime;

pub fn show_available_soon(
    room_repository: &dyn RoomRepositoryTrait,
    now: NaiveTime,
    minutes_ahead: i64,
) {
    let (limit, rooms) = room_repository.get_available_rooms_within(now, minutes_ahead);

    println!(
        "\nRooms available between {} and {}:",
        now.format("%H:%M"),
        limit.format("%H:%M")
    );

    if rooms.is_empty() {
        println!("No rooms available in this window.");
    } else {
        for room in rooms.iter() {
            println!("{}", room.describe_with_next_free_time(now));
        }
    }

    println!();
}
