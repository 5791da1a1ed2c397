use crate::application::interface::RoomRepositoryTrait;
use crate::entity::room::{Room, StudyRoom};
use crate::error::{Error, Result};
use chrono::{Duration, NaiveTime};
use rand::Rng;

#[cfg(test)]
use crate::entity::time_slot::hm;

// 利用案内と一緒に表示する勉強のコツ。固定の文言から無作為に1つ選ぶ
const STUDY_TIPS: [&str; 4] = [
    "Arrive ten minutes early to settle in.",
    "Turn off notifications to stay focused.",
    "Use active recall instead of rereading notes.",
    "Take a short break every 25 to 30 minutes.",
];

// サンプルデータ用の固定時刻。値は決め打ちなので失敗しない
fn sample_time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("invalid sample time")
}

// 全部屋の唯一の所有者。単一スレッドでの利用を前提とする。
// idの一意性は読み込みデータ側の前提であり、ここでは検査しない
pub struct RoomRepository {
    rooms: Vec<StudyRoom>,
    total_rooms_created: i64,
}

impl RoomRepository {
    pub fn new() -> Self {
        Self {
            rooms: vec![],
            total_rooms_created: 0,
        }
    }

    // 生成数のカウンタは登録時にこちら側で加算する
    fn add_room(&mut self, room: StudyRoom) {
        self.total_rooms_created += 1;
        self.rooms.push(room);
    }

    fn get_by_id_mut(&mut self, id: i64) -> Option<&mut StudyRoom> {
        for room in self.rooms.iter_mut() {
            if room.get_id() == id {
                return Some(room);
            }
        }

        None
    }
}

impl RoomRepositoryTrait for RoomRepository {
    fn load_sample_data(&mut self) {
        let mut r1 = StudyRoom::new(1, "Pod 101", "Library", 4);
        let mut r2 = StudyRoom::new(2, "Room 202", "Engineering", 6);
        let mut r3 = StudyRoom::new(3, "Study Nook 3A", "Student Center", 2);

        r1.add_reserved_slot(sample_time(9, 0), sample_time(11, 0))
            .expect("invalid sample slot");
        r1.add_reserved_slot(sample_time(14, 0), sample_time(15, 30))
            .expect("invalid sample slot");

        r2.add_reserved_slot(sample_time(10, 0), sample_time(12, 0))
            .expect("invalid sample slot");
        r2.add_reserved_slot(sample_time(16, 0), sample_time(17, 0))
            .expect("invalid sample slot");

        r3.add_reserved_slot(sample_time(13, 0), sample_time(14, 0))
            .expect("invalid sample slot");

        self.add_room(r1);
        self.add_room(r2);
        self.add_room(r3);

        log::info!("sample data loaded: {} rooms", self.rooms.len());
    }

    fn get_all_rooms(&self) -> Vec<&StudyRoom> {
        self.rooms.iter().collect()
    }

    fn get_available_rooms_at(&self, now: NaiveTime) -> Vec<&StudyRoom> {
        self.rooms
            .iter()
            .filter(|room| room.is_available_at(now))
            .collect()
    }

    fn get_available_rooms_within(
        &self,
        now: NaiveTime,
        minutes_ahead: i64,
    ) -> (NaiveTime, Vec<&StudyRoom>) {
        // 負の分数は0分として扱う。時計は24時間で一周するので、
        // 1日を超えるぶんはあらかじめ一周に丸めておく
        let safe_minutes = minutes_ahead.max(0) % (24 * 60);
        let limit = now + Duration::minutes(safe_minutes);

        let rooms = self
            .rooms
            .iter()
            .filter(|room| room.is_available_between(now, limit))
            .collect();

        (limit, rooms)
    }

    fn get_by_id(&self, id: i64) -> Option<&StudyRoom> {
        for room in self.rooms.iter() {
            if room.get_id() == id {
                return Some(room);
            }
        }

        None
    }

    fn check_in(&mut self, room_id: i64, now: NaiveTime) -> Result<&StudyRoom> {
        let room = match self.get_by_id_mut(room_id) {
            Some(room) => room,
            None => {
                log::warn!("check-in failed: room id {} not found", room_id);
                return Err(Error::RoomNotFound(room_id));
            }
        };

        if !room.is_available_at(now) {
            log::warn!(
                "check-in failed: room id {} is unavailable at {}",
                room_id,
                now.format("%H:%M")
            );
            return Err(Error::RoomUnavailable(room_id));
        }

        room.set_occupied(true);
        log::info!("checked in to room id {}", room_id);

        Ok(room)
    }

    fn check_out(&mut self, room_id: i64) -> Result<&StudyRoom> {
        let room = match self.get_by_id_mut(room_id) {
            Some(room) => room,
            None => {
                log::warn!("check-out failed: room id {} not found", room_id);
                return Err(Error::RoomNotFound(room_id));
            }
        };

        if !room.is_occupied() {
            log::warn!("check-out failed: room id {} is not occupied", room_id);
            return Err(Error::RoomNotOccupied(room_id));
        }

        room.set_occupied(false);
        log::info!("checked out of room id {}", room_id);

        Ok(room)
    }

    fn suggest_study_tip(&self) -> &str {
        let index = rand::thread_rng().gen_range(0..STUDY_TIPS.len());

        STUDY_TIPS[index]
    }

    fn get_total_rooms_created(&self) -> i64 {
        self.total_rooms_created
    }
}

#[test]
fn test_load_sample_data_3部屋が登録順で読み込まれること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let rooms = repository.get_all_rooms();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[0].get_name(), "Pod 101");
    assert_eq!(rooms[1].get_name(), "Room 202");
    assert_eq!(rooms[2].get_name(), "Study Nook 3A");

    let ids: Vec<i64> = rooms.iter().map(|room| room.get_id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_get_total_rooms_created_部屋の生成ごとに加算されること() {
    let mut repository = RoomRepository::new();
    assert_eq!(repository.get_total_rooms_created(), 0);

    repository.load_sample_data();
    assert_eq!(repository.get_total_rooms_created(), 3);
}

#[test]
#[allow(non_snake_case)]
fn test_get_by_id_該当する部屋がない場合はNoneを返すこと() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    assert!(repository.get_by_id(-1).is_none());
    assert!(repository.get_by_id(99).is_none());
}

#[test]
fn test_get_by_id_idだけで検索されること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let room = repository.get_by_id(2).unwrap();
    assert_eq!(room.get_name(), "Room 202");
}

#[test]
fn test_get_available_rooms_at_進行中の予約がある部屋は除外されること() {
    // 10:30の時点ではPod 101とRoom 202の予約が進行中
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let rooms = repository.get_available_rooms_at(hm(10, 30));

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].get_id(), 3);
}

#[test]
fn test_get_available_rooms_at_使用中の部屋は除外されること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();
    repository.check_in(3, hm(12, 0)).unwrap();

    let rooms = repository.get_available_rooms_at(hm(12, 30));

    let ids: Vec<i64> = rooms.iter().map(|room| room.get_id()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_get_available_rooms_within_負の分数は0分に丸められること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let (limit, rooms) = repository.get_available_rooms_within(hm(8, 0), -5);

    // 窓の終端は基準時刻そのものになる
    assert_eq!(limit, hm(8, 0));
    assert_eq!(rooms.len(), 3);
}

#[test]
fn test_get_available_rooms_within_窓が深夜をまたぐ場合は時刻が一周すること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let (limit, rooms) = repository.get_available_rooms_within(hm(23, 50), 30);

    // どの予約も23:50より前に終わっているので、3部屋とも窓に触れない
    assert_eq!(limit, hm(0, 20));
    assert_eq!(rooms.len(), 3);
}

#[test]
fn test_get_available_rooms_within_1日を超える分数は時計の一周に丸められること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    // 200兆分を1日で割った余りは1280分(21時間20分)
    let (limit, rooms) = repository.get_available_rooms_within(hm(8, 0), 200_000_000_000_000);

    assert_eq!(limit, hm(5, 20));
    assert_eq!(rooms.len(), 3);
}

#[test]
fn test_get_available_rooms_within_窓に予約が触れる部屋は除外されること() {
    /*
     窓:        [08:30  09:00]
     Pod 101:          [09:00     11:00)  → 終端が触れるので除外
     Room 202:             [10:00   12:00)
    */
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let (limit, rooms) = repository.get_available_rooms_within(hm(8, 30), 30);

    assert_eq!(limit, hm(9, 0));
    let ids: Vec<i64> = rooms.iter().map(|room| room.get_id()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_check_in_正常系() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let room = repository.check_in(1, hm(12, 0)).unwrap();
    assert_eq!(room.basic_info(), "Pod 101 in Library");

    assert!(repository.get_by_id(1).unwrap().is_occupied());
}

#[test]
#[allow(non_snake_case)]
fn test_check_in_存在しない部屋はRoomNotFoundとなること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let actual = repository.check_in(-1, hm(12, 0)).err();
    let expected = Some(Error::RoomNotFound(-1));
    assert_eq!(actual, expected);
}

#[test]
#[allow(non_snake_case)]
fn test_check_in_予約中の部屋はRoomUnavailableとなり状態が変わらないこと() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let actual = repository.check_in(1, hm(10, 0)).err();
    let expected = Some(Error::RoomUnavailable(1));
    assert_eq!(actual, expected);

    assert!(!repository.get_by_id(1).unwrap().is_occupied());
}

#[test]
#[allow(non_snake_case)]
fn test_check_in_使用中の部屋はRoomUnavailableとなること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();
    repository.check_in(1, hm(12, 0)).unwrap();

    let actual = repository.check_in(1, hm(12, 5)).err();
    let expected = Some(Error::RoomUnavailable(1));
    assert_eq!(actual, expected);
}

#[test]
fn test_check_out_入退室の往復で元の状態に戻ること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();
    assert!(!repository.get_by_id(1).unwrap().is_occupied());

    repository.check_in(1, hm(12, 0)).unwrap();
    assert!(repository.get_by_id(1).unwrap().is_occupied());

    let room = repository.check_out(1).unwrap();
    assert_eq!(room.basic_info(), "Pod 101 in Library");

    assert!(!repository.get_by_id(1).unwrap().is_occupied());
}

#[test]
#[allow(non_snake_case)]
fn test_check_out_存在しない部屋はRoomNotFoundとなること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let actual = repository.check_out(-1).err();
    let expected = Some(Error::RoomNotFound(-1));
    assert_eq!(actual, expected);
}

#[test]
#[allow(non_snake_case)]
fn test_check_out_使用中でない部屋はRoomNotOccupiedとなること() {
    let mut repository = RoomRepository::new();
    repository.load_sample_data();

    let actual = repository.check_out(2).err();
    let expected = Some(Error::RoomNotOccupied(2));
    assert_eq!(actual, expected);
}

#[test]
fn test_suggest_study_tip_固定のヒント集から選ばれること() {
    let repository = RoomRepository::new();

    for _ in 0..100 {
        let tip = repository.suggest_study_tip();
        assert!(STUDY_TIPS.contains(&tip));
    }
}
