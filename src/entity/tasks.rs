//! 任务实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::tasks::entities::Task;
use crate::utils::{from_millis, parse_stored, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub assigned_by: i64,
    pub assigned_to: i64,
    pub class_id: Option<i64>,
    pub due_date: Option<i64>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AssignedBy",
        to = "super::users::Column::Id"
    )]
    AssignedBy,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AssignedTo",
        to = "super::users::Column::Id"
    )]
    AssignedTo,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
    #[sea_orm(has_many = "super::task_submissions::Entity")]
    TaskSubmissions,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl Related<super::task_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskSubmissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_task(self) -> Task {
        Task {
            id: Some(self.id),
            title: self.title,
            description: self.description,
            assigned_by: self.assigned_by,
            assigned_to: self.assigned_to,
            class_id: self.class_id,
            due_date: self.due_date.map(from_millis),
            status: parse_stored(&self.status, "tasks.status"),
            created_at: from_millis(self.created_at),
            updated_at: from_millis(self.updated_at),
        }
    }
}

impl From<Task> for ActiveModel {
    fn from(task: Task) -> Self {
        ActiveModel {
            id: task.id.map_or(NotSet, Set),
            title: Set(task.title),
            description: Set(task.description),
            assigned_by: Set(task.assigned_by),
            assigned_to: Set(task.assigned_to),
            class_id: Set(task.class_id),
            due_date: Set(task.due_date.map(to_millis)),
            status: Set(task.status.to_string()),
            created_at: Set(to_millis(task.created_at)),
            updated_at: Set(to_millis(task.updated_at)),
        }
    }
}
