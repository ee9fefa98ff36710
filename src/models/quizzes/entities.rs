use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_string_enum! {
    /// 作答状态
    AttemptStatus {
        InProgress => "in_progress",
        Submitted => "submitted",
    }
}

// 测验
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub duration_minutes: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

// 测验题目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: Option<i64>,
    pub quiz_id: i64,
    pub text: String,
    pub marks: f64,
    /// 题目在测验中的顺序
    pub position: i32,
}

// 题目选项
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: Option<i64>,
    pub question_id: i64,
    pub text: String,
    pub correct: bool,
    pub position: i32,
}

// 作答记录，每个学生每个测验最多一条
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: Option<i64>,
    pub quiz_id: i64,
    pub student_id: i64,
    pub status: AttemptStatus,
    pub score: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}

// 单题答案
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub id: Option<i64>,
    pub attempt_id: i64,
    pub question_id: i64,
    pub selected_option_id: Option<i64>,
    pub correct: bool,
    pub marks_awarded: f64,
}
