use crate::entity::room::StudyRoom;
use crate::error::Result;
use chrono::NaiveTime;

pub trait RoomRepositoryTrait {
    fn load_sample_data(&mut self);
    fn get_all_rooms(&self) -> Vec<&StudyRoom>;
    fn get_available_rooms_at(&self, now: NaiveTime) -> Vec<&StudyRoom>;
    // 窓の終端は負の分数を0に丸めた上で now + minutes_ahead となる
    // (時計は24時間で一周する)。丸めた後の終端も合わせて返す
    fn get_available_rooms_within(
        &self,
        now: NaiveTime,
        minutes_ahead: i64,
    ) -> (NaiveTime, Vec<&StudyRoom>);
    fn get_by_id(&self, id: i64) -> Option<&StudyRoom>;
    fn check_in(&mut self, room_id: i64, now: NaiveTime) -> Result<&StudyRoom>;
    fn check_out(&mut self, room_id: i64) -> Result<&StudyRoom>;
    fn suggest_study_tip(&self) -> &str;
    fn get_total_rooms_created(&self) -> i64;
}
