use chrono::NaiveTime;
use thiserror::Error;

// 予約区間の構築や入退室で失敗したときに呼び出し元へ返す値。
// CLI側はメッセージを表示してセッションを続行する
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("end time {end} must not be before start time {start}")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },

    #[error("room id {0} not found")]
    RoomNotFound(i64),

    #[error("room id {0} is reserved or already occupied")]
    RoomUnavailable(i64),

    #[error("room id {0} is not currently occupied")]
    RoomNotOccupied(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
