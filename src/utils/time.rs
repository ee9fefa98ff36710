//! 时间戳转换
//!
//! 数据库中的时间统一以 UTC 毫秒时间戳存储。

use chrono::{DateTime, Utc};

/// 转换为毫秒时间戳
pub fn to_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// 从毫秒时间戳还原，超出范围时回退到 Unix 纪元
pub fn from_millis(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ts).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_millis_round_trip_keeps_sub_second_precision() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(from_millis(to_millis(dt)), dt);
    }

    #[test]
    fn test_out_of_range_falls_back_to_epoch() {
        assert_eq!(from_millis(i64::MAX), DateTime::<Utc>::default());
    }
}
