use crate::application::interface::RoomRepositoryTrait;
use crate::entity::room::Room;
use chrono::NaiveTime;

pub fn check_in_room(room_repository: &mut dyn RoomRepositoryTrait, room_id: i64, now: NaiveTime) {
    match room_repository.check_in(room_id, now) {
        Ok(room) => {
            println!("Checked in to {}.\n", room.basic_info());
        }
        Err(err) => {
            println!("{}\n", err);
        }
    }
}
