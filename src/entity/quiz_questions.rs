//! 测验题目实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::quizzes::entities::QuizQuestion;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    pub marks: f64,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quizzes::Entity",
        from = "Column::QuizId",
        to = "super::quizzes::Column::Id"
    )]
    Quiz,
    #[sea_orm(has_many = "super::quiz_options::Entity")]
    Options,
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::quiz_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Options.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> QuizQuestion {
        QuizQuestion {
            id: Some(self.id),
            quiz_id: self.quiz_id,
            text: self.question_text,
            marks: self.marks,
            position: self.position,
        }
    }
}

impl From<QuizQuestion> for ActiveModel {
    fn from(question: QuizQuestion) -> Self {
        ActiveModel {
            id: question.id.map_or(NotSet, Set),
            quiz_id: Set(question.quiz_id),
            question_text: Set(question.text),
            marks: Set(question.marks),
            position: Set(question.position),
        }
    }
}
