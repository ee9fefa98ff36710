//! 笔记实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::notes::entities::Note;
use crate::utils::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_by: i64,
    pub assigned_to: Option<i64>,
    pub is_public: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AssignedTo",
        to = "super::users::Column::Id"
    )]
    Assignee,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_note(self) -> Note {
        Note {
            id: Some(self.id),
            title: self.title,
            content: self.content,
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            public: self.is_public,
            created_at: from_millis(self.created_at),
            updated_at: from_millis(self.updated_at),
        }
    }
}

impl From<Note> for ActiveModel {
    fn from(note: Note) -> Self {
        ActiveModel {
            id: note.id.map_or(NotSet, Set),
            title: Set(note.title),
            content: Set(note.content),
            created_by: Set(note.created_by),
            assigned_to: Set(note.assigned_to),
            is_public: Set(note.public),
            created_at: Set(to_millis(note.created_at)),
            updated_at: Set(to_millis(note.updated_at)),
        }
    }
}
