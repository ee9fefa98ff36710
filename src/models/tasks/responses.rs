use serde::{Deserialize, Serialize};

use super::entities::{Submission, Task};
use crate::models::users::entities::User;

/// 任务及其布置者、接收者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDetail {
    pub task: Task,
    pub assigned_by: User,
    pub assigned_to: User,
}

/// 提交及其任务、任务布置者和提交学生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDetail {
    pub submission: Submission,
    pub task: Task,
    pub task_assigned_by: User,
    pub student: User,
}
