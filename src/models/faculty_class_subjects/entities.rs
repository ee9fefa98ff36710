use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 教师-班级-科目分配
//
// 同一教师在同一班级可以有多个有效科目，(faculty_id, class_id, subject) 唯一。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacultyClassSubject {
    pub id: Option<i64>,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub active: bool,
    pub assigned_at: DateTime<Utc>,
}
