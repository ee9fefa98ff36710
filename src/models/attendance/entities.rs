use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

define_string_enum! {
    /// 考勤状态
    AttendanceStatus {
        Present => "present",
        Absent => "absent",
        Late => "late",
        Excused => "excused",
    }
}

// 考勤记录
//
// (student_id, date, faculty_id) 在数据库层唯一。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: Option<i64>,
    pub student_id: i64,
    pub class_id: i64,
    pub faculty_id: i64,
    pub subject: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub marked_at: DateTime<Utc>,
}
