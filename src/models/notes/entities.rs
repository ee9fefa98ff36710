use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 笔记
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub created_by: i64,
    pub assigned_to: Option<i64>,
    /// 公开笔记对所有用户可见
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
