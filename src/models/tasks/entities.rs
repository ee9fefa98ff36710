use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_string_enum! {
    /// 任务状态
    TaskStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

define_string_enum! {
    /// 学生提交状态
    SubmissionStatus {
        Submitted => "submitted",
        Late => "late",
        Graded => "graded",
        Returned => "returned",
    }
}

define_string_enum! {
    /// 任务完成报告的审核状态
    TaskSubmissionStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

// 任务实体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    /// 布置者
    pub assigned_by: i64,
    /// 接收者
    pub assigned_to: i64,
    pub class_id: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 学生针对任务提交的作业
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Option<i64>,
    pub task_id: i64,
    pub student_id: i64,
    pub content: Option<String>,
    pub attachment_url: Option<String>,
    pub status: SubmissionStatus,
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

// 任务接收者提交的完成报告
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskSubmission {
    pub id: Option<i64>,
    pub task_id: i64,
    pub submitted_by: i64,
    pub content: Option<String>,
    pub attachment_url: Option<String>,
    pub status: TaskSubmissionStatus,
    pub reviewer_remarks: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}
