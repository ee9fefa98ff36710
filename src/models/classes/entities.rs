use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 班级实体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: Option<i64>,
    /// 班级名称，全局唯一
    pub name: String,
    pub year: i32,
    pub division: String,
    pub department: String,
    /// 学年，例如 "2024-25"
    pub academic_year: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
