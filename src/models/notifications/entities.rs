use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 通知
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Option<i64>,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    /// 关联对象 ID（任务、测验等）
    pub reference_id: Option<i64>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
