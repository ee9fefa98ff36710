//! 提交实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::tasks::entities::Submission;
use crate::utils::{from_millis, parse_stored, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_id: i64,
    pub student_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub attachment_url: Option<String>,
    pub status: String,
    pub score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tasks::Entity",
        from = "Column::TaskId",
        to = "super::tasks::Column::Id"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> Submission {
        Submission {
            id: Some(self.id),
            task_id: self.task_id,
            student_id: self.student_id,
            content: self.content,
            attachment_url: self.attachment_url,
            status: parse_stored(&self.status, "submissions.status"),
            score: self.score,
            feedback: self.feedback,
            submitted_at: from_millis(self.submitted_at),
        }
    }
}

impl From<Submission> for ActiveModel {
    fn from(submission: Submission) -> Self {
        ActiveModel {
            id: submission.id.map_or(NotSet, Set),
            task_id: Set(submission.task_id),
            student_id: Set(submission.student_id),
            content: Set(submission.content),
            attachment_url: Set(submission.attachment_url),
            status: Set(submission.status.to_string()),
            score: Set(submission.score),
            feedback: Set(submission.feedback),
            submitted_at: Set(to_millis(submission.submitted_at)),
        }
    }
}
