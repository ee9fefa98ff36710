use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// 成绩记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marks {
    pub id: Option<i64>,
    pub student_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub assessment_type_id: i64,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub assessment_date: NaiveDate,
    /// 录入成绩的教师
    pub entered_by: i64,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Marks {
    /// 得分率（百分比），满分为 0 时返回 None
    pub fn percentage(&self) -> Option<f64> {
        if self.max_marks > 0.0 {
            Some(self.marks_obtained / self.max_marks * 100.0)
        } else {
            None
        }
    }
}

// 考核类型，例如期中、期末、单元测验
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentType {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub max_marks: Option<f64>,
    pub created_by: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
