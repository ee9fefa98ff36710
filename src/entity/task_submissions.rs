//! 任务完成报告实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::tasks::entities::TaskSubmission;
use crate::utils::{from_millis, parse_stored, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "task_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_id: i64,
    pub submitted_by: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub attachment_url: Option<String>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub reviewer_remarks: Option<String>,
    pub submitted_at: i64,
    pub reviewed_at: Option<i64>,
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
        from = "Column::SubmittedBy",
        to = "super::users::Column::Id"
    )]
    Submitter,
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submitter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_task_submission(self) -> TaskSubmission {
        TaskSubmission {
            id: Some(self.id),
            task_id: self.task_id,
            submitted_by: self.submitted_by,
            content: self.content,
            attachment_url: self.attachment_url,
            status: parse_stored(&self.status, "task_submissions.status"),
            reviewer_remarks: self.reviewer_remarks,
            submitted_at: from_millis(self.submitted_at),
            reviewed_at: self.reviewed_at.map(from_millis),
        }
    }
}

impl From<TaskSubmission> for ActiveModel {
    fn from(record: TaskSubmission) -> Self {
        ActiveModel {
            id: record.id.map_or(NotSet, Set),
            task_id: Set(record.task_id),
            submitted_by: Set(record.submitted_by),
            content: Set(record.content),
            attachment_url: Set(record.attachment_url),
            status: Set(record.status.to_string()),
            reviewer_remarks: Set(record.reviewer_remarks),
            submitted_at: Set(to_millis(record.submitted_at)),
            reviewed_at: Set(record.reviewed_at.map(to_millis)),
        }
    }
}
