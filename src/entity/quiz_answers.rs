//! 测验答案实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::quizzes::entities::QuizAnswer;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub attempt_id: i64,
    pub question_id: i64,
    pub selected_option_id: Option<i64>,
    pub is_correct: bool,
    pub marks_awarded: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz_attempts::Entity",
        from = "Column::AttemptId",
        to = "super::quiz_attempts::Column::Id"
    )]
    Attempt,
    #[sea_orm(
        belongs_to = "super::quiz_questions::Entity",
        from = "Column::QuestionId",
        to = "super::quiz_questions::Column::Id"
    )]
    Question,
    #[sea_orm(
        belongs_to = "super::quiz_options::Entity",
        from = "Column::SelectedOptionId",
        to = "super::quiz_options::Column::Id"
    )]
    SelectedOption,
}

impl Related<super::quiz_attempts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempt.def()
    }
}

impl Related<super::quiz_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_answer(self) -> QuizAnswer {
        QuizAnswer {
            id: Some(self.id),
            attempt_id: self.attempt_id,
            question_id: self.question_id,
            selected_option_id: self.selected_option_id,
            correct: self.is_correct,
            marks_awarded: self.marks_awarded,
        }
    }
}

impl From<QuizAnswer> for ActiveModel {
    fn from(answer: QuizAnswer) -> Self {
        ActiveModel {
            id: answer.id.map_or(NotSet, Set),
            attempt_id: Set(answer.attempt_id),
            question_id: Set(answer.question_id),
            selected_option_id: Set(answer.selected_option_id),
            is_correct: Set(answer.correct),
            marks_awarded: Set(answer.marks_awarded),
        }
    }
}
