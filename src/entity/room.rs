use chrono::NaiveTime;

use crate::entity::time_slot::TimeSlot;
use crate::error::Result;

#[cfg(test)]
use crate::entity::time_slot::hm;

// 部屋の種別に共通する基本情報のインターフェース。
// 現状の具象型はStudyRoomのみだが、要約の組み立ては種別ごとに差し替えられる
pub trait Room {
    fn get_id(&self) -> i64;
    fn get_name(&self) -> &str;
    fn get_building(&self) -> &str;
    fn set_name(&mut self, name: &str);
    fn set_building(&mut self, building: &str);

    // 「どの建物のどの部屋か」だけの短い要約
    fn basic_info(&self) -> String {
        format!("{} in {}", self.get_name(), self.get_building())
    }
}

pub struct StudyRoom {
    id: i64, // 生成後は変更されない
    name: String,
    building: String,
    capacity: i64, // 同時に利用できる人数
    occupied: bool,
    reserved_slots: Vec<TimeSlot>, // 追加順を保持する。重複や交差の除去はしない
}

impl StudyRoom {
    pub fn new(id: i64, name: &str, building: &str, capacity: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            building: building.to_string(),
            capacity,
            occupied: false,
            reserved_slots: vec![],
        }
    }

    pub fn get_capacity(&self) -> i64 {
        self.capacity
    }

    // 1〜99人の範囲外の値は黙って無視する (エラーにはしない)
    pub fn set_capacity(&mut self, capacity: i64) {
        if capacity <= 0 || capacity >= 100 {
            return;
        }

        self.capacity = capacity;
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    pub fn get_reserved_slots(&self) -> &Vec<TimeSlot> {
        &self.reserved_slots
    }

    // 不正な区間はそのままエラーとして呼び出し元に返す
    pub fn add_reserved_slot(&mut self, start: NaiveTime, end: NaiveTime) -> Result<()> {
        let slot = TimeSlot::new(start, end)?;
        self.reserved_slots.push(slot);

        Ok(())
    }

    pub fn is_available_at(&self, t: NaiveTime) -> bool {
        if self.occupied {
            return false;
        }

        !self.reserved_slots.iter().any(|slot| slot.is_ongoing(t))
    }

    // 窓 [start, limit] にどの予約も触れないかどうかの粗い判定。
    // 窓の途中に空き時間があっても、予約が1つでも触れていれば不可と報告する
    pub fn is_available_between(&self, start: NaiveTime, limit: NaiveTime) -> bool {
        if self.occupied {
            return false;
        }

        !self
            .reserved_slots
            .iter()
            .any(|slot| slot.overlaps(start, limit))
    }

    // 次に利用可能になる時刻。
    // 使用中フラグからは解放時刻が分からないので、予約データだけを根拠にする
    pub fn next_free_time(&self, ref_time: NaiveTime) -> Option<NaiveTime> {
        if self.is_available_at(ref_time) {
            return Some(ref_time);
        }

        let mut soonest: Option<NaiveTime> = None;
        for slot in self.reserved_slots.iter() {
            if slot.is_ongoing(ref_time) && (soonest.is_none() || slot.get_end() < soonest.unwrap())
            {
                soonest = Some(slot.get_end());
            }
        }

        soonest
    }

    pub fn describe(&self) -> String {
        let status = if self.occupied { "Yes" } else { "No" };

        format!(
            "Id: {} | Name: {} | Building: {} | Capacity: {} | Occupied: {}",
            self.id, self.name, self.building, self.capacity, status
        )
    }

    pub fn describe_with_next_free_time(&self, ref_time: NaiveTime) -> String {
        let next = match self.next_free_time(ref_time) {
            Some(t) => t.format("%H:%M").to_string(),
            None => String::from("Unknown"),
        };

        format!("{} | Next free: {}", self.describe(), next)
    }
}

impl Room for StudyRoom {
    fn get_id(&self) -> i64 {
        self.id
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_building(&self) -> &str {
        &self.building
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_building(&mut self, building: &str) {
        self.building = building.to_string();
    }
}

// 参考データのPod 101と同じ部屋: 予約は [09:00, 11:00) と [14:00, 15:30)
#[cfg(test)]
fn pod_101() -> StudyRoom {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);
    room.add_reserved_slot(hm(9, 0), hm(11, 0)).unwrap();
    room.add_reserved_slot(hm(14, 0), hm(15, 30)).unwrap();

    room
}

#[test]
fn test_new_生成直後は空室でスケジュールも空であること() {
    let room = StudyRoom::new(1, "Pod 101", "Library", 4);

    assert!(!room.is_occupied());
    assert!(room.get_reserved_slots().is_empty());
    assert_eq!(room.get_id(), 1);
    assert_eq!(room.get_capacity(), 4);
}

#[test]
fn test_basic_info_部屋名と建物名を組み合わせること() {
    let room = StudyRoom::new(1, "Pod 101", "Library", 4);

    let actual = room.basic_info();
    let expected = "Pod 101 in Library";
    assert_eq!(actual, expected);
}

#[test]
fn test_set_name_名前と建物を変更できること() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);

    room.set_name("Pod 102");
    room.set_building("Annex");

    assert_eq!(room.get_name(), "Pod 102");
    assert_eq!(room.get_building(), "Annex");
    assert_eq!(room.basic_info(), "Pod 102 in Annex");
}

#[test]
fn test_set_capacity_範囲内の値は反映されること() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);

    room.set_capacity(8);

    assert_eq!(room.get_capacity(), 8);
}

#[test]
fn test_set_capacity_0以下の値は無視されること() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);

    room.set_capacity(0);
    assert_eq!(room.get_capacity(), 4);

    room.set_capacity(-5);
    assert_eq!(room.get_capacity(), 4);
}

#[test]
fn test_set_capacity_100以上の値は無視されること() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);

    room.set_capacity(100);
    assert_eq!(room.get_capacity(), 4);

    room.set_capacity(150);
    assert_eq!(room.get_capacity(), 4);
}

#[test]
fn test_add_reserved_slot_追加順が保持されること() {
    let room = pod_101();

    let slots = room.get_reserved_slots();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].get_start(), hm(9, 0));
    assert_eq!(slots[1].get_start(), hm(14, 0));
}

#[test]
fn test_add_reserved_slot_不正な区間はエラーとなり追加されないこと() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);

    let result = room.add_reserved_slot(hm(11, 0), hm(9, 0));

    assert!(result.is_err());
    assert!(room.get_reserved_slots().is_empty());
}

#[test]
fn test_is_available_at_使用中の場合は予約に関係なく不可であること() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);
    room.set_occupied(true);

    assert!(!room.is_available_at(hm(12, 0)));
}

#[test]
fn test_is_available_at_予約が進行中の時刻は不可であること() {
    let room = pod_101();

    assert!(!room.is_available_at(hm(10, 0)));
}

#[test]
fn test_is_available_at_予約の合間の時刻は利用可能であること() {
    let room = pod_101();

    assert!(room.is_available_at(hm(12, 0)));
}

#[test]
fn test_next_free_time_利用可能な時刻ではその時刻自身を返すこと() {
    let room = pod_101();

    let actual = room.next_free_time(hm(12, 0));
    let expected = Some(hm(12, 0));
    assert_eq!(actual, expected);
}

#[test]
fn test_next_free_time_予約中は解放時刻を返すこと() {
    let room = pod_101();

    let actual = room.next_free_time(hm(10, 0));
    let expected = Some(hm(11, 0));
    assert_eq!(actual, expected);
}

#[test]
fn test_next_free_time_予約が重なっている場合は最も早い解放時刻を返すこと() {
    /*
     予約:  [09:00        11:00)
               [09:30  10:30)
     基準:        10:00 → 10:30に解放
    */
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);
    room.add_reserved_slot(hm(9, 0), hm(11, 0)).unwrap();
    room.add_reserved_slot(hm(9, 30), hm(10, 30)).unwrap();

    let actual = room.next_free_time(hm(10, 0));
    let expected = Some(hm(10, 30));
    assert_eq!(actual, expected);
}

#[test]
#[allow(non_snake_case)]
fn test_next_free_time_使用中だが進行中の予約がない場合はNoneを返すこと() {
    let mut room = pod_101();
    room.set_occupied(true);

    let actual = room.next_free_time(hm(12, 0));
    let expected = None;
    assert_eq!(actual, expected);
}

#[test]
fn test_is_available_between_使用中の場合は窓に関係なく不可であること() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);
    room.set_occupied(true);

    assert!(!room.is_available_between(hm(12, 0), hm(12, 30)));
}

#[test]
fn test_is_available_between_窓が予約を完全に含む場合も不可であること() {
    // 粗い判定なので、窓の前後に空き時間があっても予約が触れていれば不可
    let mut room = StudyRoom::new(3, "Study Nook 3A", "Student Center", 2);
    room.add_reserved_slot(hm(13, 0), hm(14, 0)).unwrap();

    assert!(!room.is_available_between(hm(12, 0), hm(15, 0)));
}

#[test]
fn test_is_available_between_窓の始端が予約の終了時刻に重なるだけでも不可であること() {
    // その時刻自体はis_available_atでは利用可能と判定される
    let room = pod_101();

    assert!(room.is_available_at(hm(11, 0)));
    assert!(!room.is_available_between(hm(11, 0), hm(13, 0)));
}

#[test]
fn test_is_available_between_どの予約にも触れない窓では利用可能であること() {
    let room = pod_101();

    assert!(room.is_available_between(hm(11, 30), hm(13, 30)));
}

#[test]
fn test_describe_整形された要約を返すこと() {
    let mut room = StudyRoom::new(1, "Pod 101", "Library", 4);

    let actual = room.describe();
    let expected = "Id: 1 | Name: Pod 101 | Building: Library | Capacity: 4 | Occupied: No";
    assert_eq!(actual, expected);

    room.set_occupied(true);
    let actual = room.describe();
    let expected = "Id: 1 | Name: Pod 101 | Building: Library | Capacity: 4 | Occupied: Yes";
    assert_eq!(actual, expected);
}

#[test]
#[allow(non_snake_case)]
fn test_describe_with_next_free_time_解放時刻が分かる場合はHHMM形式で表示されること() {
    let room = pod_101();

    let actual = room.describe_with_next_free_time(hm(10, 0));
    let expected =
        "Id: 1 | Name: Pod 101 | Building: Library | Capacity: 4 | Occupied: No | Next free: 11:00";
    assert_eq!(actual, expected);
}

#[test]
#[allow(non_snake_case)]
fn test_describe_with_next_free_time_解放時刻が不明な場合はUnknownとなること() {
    let mut room = pod_101();
    room.set_occupied(true);

    let actual = room.describe_with_next_free_time(hm(12, 0));
    let expected =
        "Id: 1 | Name: Pod 101 | Building: Library | Capacity: 4 | Occupied: Yes | Next free: Unknown";
    assert_eq!(actual, expected);
}
