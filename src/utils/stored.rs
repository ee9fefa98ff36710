//! 存储字符串到业务枚举的转换

use std::str::FromStr;

use tracing::warn;

/// 解析数据库中的枚举字符串
///
/// 无法识别的值记录警告后回退为默认变体，`column` 用于定位脏数据。
pub fn parse_stored<T>(value: &str, column: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    value.parse().unwrap_or_else(|e| {
        warn!("忽略无法识别的取值 {}={:?}: {}", column, value, e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::parse_stored;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::models::tasks::entities::TaskStatus;

    #[test]
    fn test_known_value_is_parsed() {
        let status: TaskStatus = parse_stored("completed", "tasks.status");
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn test_unknown_value_falls_back_to_default() {
        let status: AttendanceStatus = parse_stored("on_leave", "attendance.status");
        assert_eq!(status, AttendanceStatus::Present);
        let status: TaskStatus = parse_stored("", "tasks.status");
        assert_eq!(status, TaskStatus::Pending);
    }
}
