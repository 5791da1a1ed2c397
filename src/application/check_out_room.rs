use crate::application::interface::RoomRepositoryTrait;
use crate::entity::room::Room;

pub fn check_out_room(room_repository: &mut dyn RoomRepositoryTrait, room_id: i64) {
    match room_repository.check_out(room_id) {
        Ok(room) => {
            println!("Checked out of {}.\n", room.basic_info());
        }
        Err(err) => {
            println!("{}\n", err);
        }
    }
}
