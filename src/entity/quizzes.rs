//! 测验实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::quizzes::entities::Quiz;
use crate::utils::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub duration_minutes: i32,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::FacultyId",
        to = "super::users::Column::Id"
    )]
    Faculty,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(has_many = "super::quiz_questions::Entity")]
    Questions,
    #[sea_orm(has_many = "super::quiz_attempts::Entity")]
    Attempts,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::quiz_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::quiz_attempts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_quiz(self) -> Quiz {
        Quiz {
            id: Some(self.id),
            title: self.title,
            description: self.description,
            faculty_id: self.faculty_id,
            class_id: self.class_id,
            subject: self.subject,
            duration_minutes: self.duration_minutes,
            start_time: self.start_time.map(from_millis),
            end_time: self.end_time.map(from_millis),
            active: self.is_active,
            created_at: from_millis(self.created_at),
        }
    }
}

impl From<Quiz> for ActiveModel {
    fn from(quiz: Quiz) -> Self {
        ActiveModel {
            id: quiz.id.map_or(NotSet, Set),
            title: Set(quiz.title),
            description: Set(quiz.description),
            faculty_id: Set(quiz.faculty_id),
            class_id: Set(quiz.class_id),
            subject: Set(quiz.subject),
            duration_minutes: Set(quiz.duration_minutes),
            start_time: Set(quiz.start_time.map(to_millis)),
            end_time: Set(quiz.end_time.map(to_millis)),
            is_active: Set(quiz.active),
            created_at: Set(to_millis(quiz.created_at)),
        }
    }
}
