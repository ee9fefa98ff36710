//! 测验答案存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::quiz_answers::{Column, Entity as QuizAnswers};
use crate::errors::Result;
use crate::models::quizzes::entities::QuizAnswer;
use crate::storage::QuizAnswerRepository;

sea_orm_repository!(QuizAnswerStore, quiz_answers, QuizAnswer, into_answer, "测验答案");

#[async_trait]
impl QuizAnswerRepository for QuizAnswerStore {
    async fn find_by_attempt_id(&self, attempt_id: i64) -> Result<Vec<QuizAnswer>> {
        self.fetch_all(
            QuizAnswers::find()
                .filter(Column::AttemptId.eq(attempt_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_attempt_id_and_question_id(
        &self,
        attempt_id: i64,
        question_id: i64,
    ) -> Result<Option<QuizAnswer>> {
        self.fetch_one(
            QuizAnswers::find()
                .filter(Column::AttemptId.eq(attempt_id))
                .filter(Column::QuestionId.eq(question_id)),
        )
        .await
    }

    async fn count_by_attempt_id_and_correct(
        &self,
        attempt_id: i64,
        correct: bool,
    ) -> Result<u64> {
        self.fetch_count(
            QuizAnswers::find()
                .filter(Column::AttemptId.eq(attempt_id))
                .filter(Column::IsCorrect.eq(correct)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::quizzes::entities::{QuizAnswer, QuizAttempt, QuizOption, QuizQuestion};
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{at, seed_quiz, seed_user, storage};
    use crate::storage::{Repository, Storage};

    #[tokio::test]
    async fn test_answers_for_attempt() {
        let storage = storage().await;
        let quiz_id = seed_quiz(&storage, "Final").await.id.unwrap();
        let student_id = seed_user(&storage, "stu", UserRole::Student).await.id.unwrap();
        let attempt_id = storage
            .quiz_attempts()
            .save(QuizAttempt {
                quiz_id,
                student_id,
                started_at: at(0),
                ..Default::default()
            })
            .await
            .unwrap()
            .id
            .unwrap();

        let mut answers = Vec::new();
        for (position, correct) in [(1, true), (2, false), (3, true)] {
            let question_id = storage
                .quiz_questions()
                .save(QuizQuestion {
                    quiz_id,
                    text: format!("Q{position}"),
                    marks: 1.0,
                    position,
                    ..Default::default()
                })
                .await
                .unwrap()
                .id
                .unwrap();
            let option_id = storage
                .quiz_options()
                .save(QuizOption {
                    question_id,
                    text: "choice".to_string(),
                    correct,
                    position: 1,
                    ..Default::default()
                })
                .await
                .unwrap()
                .id;
            let answer = storage
                .quiz_answers()
                .save(QuizAnswer {
                    attempt_id,
                    question_id,
                    selected_option_id: option_id,
                    correct,
                    marks_awarded: if correct { 1.0 } else { 0.0 },
                    ..Default::default()
                })
                .await
                .unwrap();
            answers.push(answer);
        }

        let repo = storage.quiz_answers();
        assert_eq!(repo.find_by_attempt_id(attempt_id).await.unwrap(), answers);
        assert_eq!(repo.count_by_attempt_id_and_correct(attempt_id, true).await.unwrap(), 2);
        assert_eq!(repo.count_by_attempt_id_and_correct(attempt_id, false).await.unwrap(), 1);
        assert_eq!(
            repo.count_by_attempt_id_and_correct(attempt_id + 1, true)
                .await
                .unwrap(),
            0
        );

        let second = &answers[1];
        assert_eq!(
            repo.find_by_attempt_id_and_question_id(attempt_id, second.question_id)
                .await
                .unwrap(),
            Some(second.clone())
        );
    }
}
