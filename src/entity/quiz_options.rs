//! 题目选项实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::quizzes::entities::QuizOption;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub question_id: i64,
    #[sea_orm(column_type = "Text")]
    pub option_text: String,
    pub is_correct: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz_questions::Entity",
        from = "Column::QuestionId",
        to = "super::quiz_questions::Column::Id"
    )]
    Question,
}

impl Related<super::quiz_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_option(self) -> QuizOption {
        QuizOption {
            id: Some(self.id),
            question_id: self.question_id,
            text: self.option_text,
            correct: self.is_correct,
            position: self.position,
        }
    }
}

impl From<QuizOption> for ActiveModel {
    fn from(option: QuizOption) -> Self {
        ActiveModel {
            id: option.id.map_or(NotSet, Set),
            question_id: Set(option.question_id),
            option_text: Set(option.text),
            is_correct: Set(option.correct),
            position: Set(option.position),
        }
    }
}
