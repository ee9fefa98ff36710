use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_string_enum! {
    /// 直播课状态
    LiveClassStatus {
        Scheduled => "scheduled",
        Live => "live",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

// 直播课
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveClass {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub meeting_url: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: LiveClassStatus,
    pub created_at: DateTime<Utc>,
}
