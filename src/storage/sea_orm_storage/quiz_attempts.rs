//! 测验作答存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::users::{load_users, required_user};
use crate::entity::quiz_attempts::{Column, Entity as QuizAttempts};
use crate::errors::Result;
use crate::models::quizzes::{
    entities::{AttemptStatus, QuizAttempt},
    responses::QuizAttemptDetail,
};
use crate::storage::QuizAttemptRepository;

sea_orm_repository!(QuizAttemptStore, quiz_attempts, QuizAttempt, into_attempt, "作答记录");

#[async_trait]
impl QuizAttemptRepository for QuizAttemptStore {
    async fn find_by_quiz_id(&self, quiz_id: i64) -> Result<Vec<QuizAttempt>> {
        self.fetch_all(
            QuizAttempts::find()
                .filter(Column::QuizId.eq(quiz_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<QuizAttempt>> {
        self.fetch_all(
            QuizAttempts::find()
                .filter(Column::StudentId.eq(student_id))
                .order_by_desc(Column::StartedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_quiz_id_and_status(
        &self,
        quiz_id: i64,
        status: AttemptStatus,
    ) -> Result<Vec<QuizAttempt>> {
        self.fetch_all(
            QuizAttempts::find()
                .filter(Column::QuizId.eq(quiz_id))
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_quiz_id_and_student_id(
        &self,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<Option<QuizAttempt>> {
        self.fetch_one(
            QuizAttempts::find()
                .filter(Column::QuizId.eq(quiz_id))
                .filter(Column::StudentId.eq(student_id)),
        )
        .await
    }

    async fn exists_by_quiz_id_and_student_id(
        &self,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        let count = self
            .fetch_count(
                QuizAttempts::find()
                    .filter(Column::QuizId.eq(quiz_id))
                    .filter(Column::StudentId.eq(student_id)),
            )
            .await?;
        Ok(count > 0)
    }

    async fn count_by_quiz_id(&self, quiz_id: i64) -> Result<u64> {
        self.fetch_count(QuizAttempts::find().filter(Column::QuizId.eq(quiz_id)))
            .await
    }

    async fn find_by_quiz_id_with_student(&self, quiz_id: i64) -> Result<Vec<QuizAttemptDetail>> {
        let attempts = self.find_by_quiz_id(quiz_id).await?;
        let users = load_users(&self.db, attempts.iter().map(|a| a.student_id)).await?;

        attempts
            .into_iter()
            .map(|attempt| -> Result<QuizAttemptDetail> {
                let context = format!("作答记录 {:?}", attempt.id);
                Ok(QuizAttemptDetail {
                    student: required_user(&users, attempt.student_id, &context)?,
                    attempt,
                })
            })
            .collect()
    }
}
