use chrono::NaiveTime;

use crate::error::{Error, Result};

// テスト用の時刻リテラル。秒は常に0とする
#[cfg(test)]
pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("invalid time literal")
}

// 部屋の予約済み時間帯を表す半開区間 [start, end)。
// スケジュール読み込み時に一度だけ生成され、以後は変更されない
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    // end == start の空区間は許容する
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidInterval { start, end });
        }

        Ok(Self { start, end })
    }

    // 時刻tにこの予約が進行中かどうか。[start, end) の半開区間で判定する
    pub fn is_ongoing(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }

    // 問い合わせ窓 [a, b] との交差判定。
    // 窓の両端は閉区間として扱う (is_ongoingの半開区間とは一致しない)
    pub fn overlaps(&self, a: NaiveTime, b: NaiveTime) -> bool {
        !(self.end < a || b < self.start)
    }

    pub fn get_start(&self) -> NaiveTime {
        self.start
    }

    pub fn get_end(&self) -> NaiveTime {
        self.end
    }
}

#[test]
fn test_new_正常系() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert_eq!(slot.get_start(), hm(9, 0));
    assert_eq!(slot.get_end(), hm(11, 0));
}

#[test]
fn test_new_開始と終了が同時刻の場合は空の区間として生成できること() {
    let slot = TimeSlot::new(hm(10, 0), hm(10, 0)).unwrap();

    assert_eq!(slot.get_start(), slot.get_end());
}

#[test]
#[allow(non_snake_case)]
fn test_new_終了が開始より前の場合はInvalidIntervalとなること() {
    let actual = TimeSlot::new(hm(11, 0), hm(9, 0));
    let expected = Err(Error::InvalidInterval {
        start: hm(11, 0),
        end: hm(9, 0),
    });

    assert_eq!(actual, expected);
}

#[test]
fn test_is_ongoing_開始時刻ちょうどは進行中であること() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(slot.is_ongoing(hm(9, 0)));
}

#[test]
fn test_is_ongoing_終了時刻ちょうどは進行中ではないこと() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(!slot.is_ongoing(hm(11, 0)));
}

#[test]
fn test_is_ongoing_区間の内側の時刻では進行中であること() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(slot.is_ongoing(hm(10, 30)));
}

#[test]
fn test_is_ongoing_区間の外側の時刻では進行中ではないこと() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(!slot.is_ongoing(hm(8, 59)));
    assert!(!slot.is_ongoing(hm(11, 1)));
}

#[test]
fn test_is_ongoing_空の区間はどの時刻でも進行中にならないこと() {
    let slot = TimeSlot::new(hm(10, 0), hm(10, 0)).unwrap();

    assert!(!slot.is_ongoing(hm(10, 0)));
}

#[test]
fn test_overlaps_窓が区間と重なっている場合() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(slot.overlaps(hm(10, 0), hm(12, 0)));
}

#[test]
fn test_overlaps_窓が区間を完全に含む場合() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(slot.overlaps(hm(8, 0), hm(12, 0)));
}

#[test]
fn test_overlaps_窓の終端が開始時刻に一致するだけでも交差とみなされること() {
    // 窓は閉区間なので、端が触れるだけで交差になる
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(slot.overlaps(hm(8, 0), hm(9, 0)));
}

#[test]
fn test_overlaps_窓の始端が終了時刻に一致するだけでも交差とみなされること() {
    // is_ongoing(end) はfalseだが、overlapsの窓は閉区間なのでtrueになる
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(!slot.is_ongoing(hm(11, 0)));
    assert!(slot.overlaps(hm(11, 0), hm(12, 0)));
}

#[test]
fn test_overlaps_窓が区間より完全に前の場合は交差しないこと() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(!slot.overlaps(hm(7, 0), hm(8, 59)));
}

#[test]
fn test_overlaps_窓が区間より完全に後の場合は交差しないこと() {
    let slot = TimeSlot::new(hm(9, 0), hm(11, 0)).unwrap();

    assert!(!slot.overlaps(hm(11, 1), hm(12, 0)));
}

#[test]
fn test_overlaps_空の区間でも窓と接していれば交差とみなされること() {
    let slot = TimeSlot::new(hm(10, 0), hm(10, 0)).unwrap();

    assert!(slot.overlaps(hm(10, 0), hm(10, 0)));
    assert!(slot.overlaps(hm(9, 0), hm(11, 0)));
}
