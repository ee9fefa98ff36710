//! 题目选项存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::quiz_options::{Column, Entity as QuizOptions};
use crate::errors::Result;
use crate::models::quizzes::entities::QuizOption;
use crate::storage::QuizOptionRepository;

sea_orm_repository!(QuizOptionStore, quiz_options, QuizOption, into_option, "题目选项");

#[async_trait]
impl QuizOptionRepository for QuizOptionStore {
    async fn find_by_question_id(&self, question_id: i64) -> Result<Vec<QuizOption>> {
        self.fetch_all(
            QuizOptions::find()
                .filter(Column::QuestionId.eq(question_id))
                .order_by_asc(Column::Position)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_question_id_and_correct(
        &self,
        question_id: i64,
        correct: bool,
    ) -> Result<Vec<QuizOption>> {
        self.fetch_all(
            QuizOptions::find()
                .filter(Column::QuestionId.eq(question_id))
                .filter(Column::IsCorrect.eq(correct))
                .order_by_asc(Column::Position)
                .order_by_asc(Column::Id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::quizzes::entities::{QuizOption, QuizQuestion};
    use crate::storage::sea_orm_storage::test_support::{seed_quiz, storage};
    use crate::storage::{Repository, Storage};

    #[tokio::test]
    async fn test_options_by_position_and_correctness() {
        let storage = storage().await;
        let quiz_id = seed_quiz(&storage, "Chemistry").await.id.unwrap();
        let question_id = storage
            .quiz_questions()
            .save(QuizQuestion {
                quiz_id,
                text: "Noble gases?".to_string(),
                marks: 2.0,
                position: 1,
                ..Default::default()
            })
            .await
            .unwrap()
            .id
            .unwrap();

        for (text, correct, position) in [("Neon", true, 3), ("Oxygen", false, 1), ("Argon", true, 2)] {
            storage
                .quiz_options()
                .save(QuizOption {
                    question_id,
                    text: text.to_string(),
                    correct,
                    position,
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let options = storage.quiz_options();
        let all: Vec<String> = options
            .find_by_question_id(question_id)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.text)
            .collect();
        assert_eq!(all, vec!["Oxygen", "Argon", "Neon"]);

        let correct: Vec<String> = options
            .find_by_question_id_and_correct(question_id, true)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.text)
            .collect();
        assert_eq!(correct, vec!["Argon", "Neon"]);
        assert!(options.find_by_question_id(question_id + 1).await.unwrap().is_empty());
    }
}
