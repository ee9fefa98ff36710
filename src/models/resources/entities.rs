use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_string_enum! {
    /// 资源类型
    ResourceType {
        Document => "document",
        Video => "video",
        Link => "link",
        Presentation => "presentation",
        Other => "other",
    }
}

// 学习资源（上传的文件或外部链接）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub subject: String,
    pub resource_type: ResourceType,
    pub url: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub class_id: Option<i64>,
    pub uploaded_by: i64,
    pub public: bool,
    pub uploaded_at: DateTime<Utc>,
}
