//! 测验作答实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::quizzes::entities::QuizAttempt;
use crate::utils::{from_millis, parse_stored, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    pub student_id: i64,
    pub status: String,
    pub score: Option<f64>,
    pub started_at: i64,
    pub submitted_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quizzes::Entity",
        from = "Column::QuizId",
        to = "super::quizzes::Column::Id"
    )]
    Quiz,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(has_many = "super::quiz_answers::Entity")]
    Answers,
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::quiz_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attempt(self) -> QuizAttempt {
        QuizAttempt {
            id: Some(self.id),
            quiz_id: self.quiz_id,
            student_id: self.student_id,
            status: parse_stored(&self.status, "quiz_attempts.status"),
            score: self.score,
            started_at: from_millis(self.started_at),
            submitted_at: self.submitted_at.map(from_millis),
        }
    }
}

impl From<QuizAttempt> for ActiveModel {
    fn from(attempt: QuizAttempt) -> Self {
        ActiveModel {
            id: attempt.id.map_or(NotSet, Set),
            quiz_id: Set(attempt.quiz_id),
            student_id: Set(attempt.student_id),
            status: Set(attempt.status.to_string()),
            score: Set(attempt.score),
            started_at: Set(to_millis(attempt.started_at)),
            submitted_at: Set(attempt.submitted_at.map(to_millis)),
        }
    }
}
