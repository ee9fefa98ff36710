//! 测验题目存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::quizzes::attach_options;
use crate::entity::quiz_questions::{Column, Entity as QuizQuestions};
use crate::errors::Result;
use crate::models::quizzes::{entities::QuizQuestion, responses::QuestionWithOptions};
use crate::storage::QuizQuestionRepository;

sea_orm_repository!(QuizQuestionStore, quiz_questions, QuizQuestion, into_question, "测验题目");

#[async_trait]
impl QuizQuestionRepository for QuizQuestionStore {
    async fn find_by_quiz_id(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>> {
        self.fetch_all(
            QuizQuestions::find()
                .filter(Column::QuizId.eq(quiz_id))
                .order_by_asc(Column::Position)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn count_by_quiz_id(&self, quiz_id: i64) -> Result<u64> {
        self.fetch_count(QuizQuestions::find().filter(Column::QuizId.eq(quiz_id)))
            .await
    }

    async fn find_by_id_with_options(&self, id: i64) -> Result<Option<QuestionWithOptions>> {
        let Some(question) = self.fetch_one(QuizQuestions::find_by_id(id)).await? else {
            return Ok(None);
        };
        Ok(attach_options(&self.db, vec![question]).await?.pop())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::quizzes::entities::{QuizOption, QuizQuestion};
    use crate::storage::sea_orm_storage::test_support::{seed_quiz, storage};
    use crate::storage::{Repository, Storage};

    #[tokio::test]
    async fn test_questions_by_position_and_count() {
        let storage = storage().await;
        let quiz_id = seed_quiz(&storage, "Geometry").await.id.unwrap();
        let questions = storage.quiz_questions();
        assert_eq!(questions.count_by_quiz_id(quiz_id).await.unwrap(), 0);

        for (text, position) in [("third", 3), ("first", 1), ("second", 2)] {
            questions
                .save(QuizQuestion {
                    quiz_id,
                    text: text.to_string(),
                    marks: 1.0,
                    position,
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let texts: Vec<String> = questions
            .find_by_quiz_id(quiz_id)
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(questions.count_by_quiz_id(quiz_id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_find_by_id_with_options() {
        let storage = storage().await;
        let quiz_id = seed_quiz(&storage, "Geometry").await.id.unwrap();
        let question = storage
            .quiz_questions()
            .save(QuizQuestion {
                quiz_id,
                text: "How many sides has a hexagon?".to_string(),
                marks: 1.0,
                position: 1,
                ..Default::default()
            })
            .await
            .unwrap();
        let question_id = question.id.unwrap();
        let mut saved = Vec::new();
        for (text, correct, position) in [("6", true, 1), ("8", false, 2)] {
            saved.push(
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
                    .unwrap(),
            );
        }

        let loaded = storage
            .quiz_questions()
            .find_by_id_with_options(question_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.question, question);
        assert_eq!(loaded.options, saved);
        assert!(
            storage
                .quiz_questions()
                .find_by_id_with_options(question_id + 1)
                .await
                .unwrap()
                .is_none()
        );
    }
}
