//! 测验存储操作

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::quiz_options::{Column as OptionColumn, Entity as QuizOptions};
use crate::entity::quiz_questions::{Column as QuestionColumn, Entity as QuizQuestions};
use crate::entity::quizzes::{Column, Entity as Quizzes};
use crate::errors::{Result, TrackerError};
use crate::models::quizzes::{
    entities::{Quiz, QuizOption, QuizQuestion},
    responses::{QuestionWithOptions, QuizDetail},
};
use crate::storage::QuizRepository;

sea_orm_repository!(QuizStore, quizzes, Quiz, into_quiz, "测验");

/// 为题目批量加载选项，题目与选项都按 position 排序
pub(crate) async fn attach_options<C: ConnectionTrait>(
    db: &C,
    questions: Vec<QuizQuestion>,
) -> Result<Vec<QuestionWithOptions>> {
    let ids: Vec<i64> = questions.iter().filter_map(|q| q.id).collect();
    let mut options: HashMap<i64, Vec<QuizOption>> = HashMap::new();
    if !ids.is_empty() {
        let rows = QuizOptions::find()
            .filter(OptionColumn::QuestionId.is_in(ids))
            .order_by_asc(OptionColumn::Position)
            .order_by_asc(OptionColumn::Id)
            .all(db)
            .await
            .map_err(|e| TrackerError::from_db("查询题目选项失败", e))?;
        for row in rows {
            options
                .entry(row.question_id)
                .or_default()
                .push(row.into_option());
        }
    }

    Ok(questions
        .into_iter()
        .map(|question| QuestionWithOptions {
            options: question
                .id
                .and_then(|id| options.remove(&id))
                .unwrap_or_default(),
            question,
        })
        .collect())
}

#[async_trait]
impl QuizRepository for QuizStore {
    async fn find_by_faculty_id(&self, faculty_id: i64) -> Result<Vec<Quiz>> {
        self.fetch_all(
            Quizzes::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<Quiz>> {
        self.fetch_all(
            Quizzes::find()
                .filter(Column::ClassId.eq(class_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_active(&self, class_id: i64, active: bool) -> Result<Vec<Quiz>> {
        self.fetch_all(
            Quizzes::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_subject(&self, subject: &str) -> Result<Vec<Quiz>> {
        self.fetch_all(
            Quizzes::find()
                .filter(Column::Subject.eq(subject))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_faculty_id_and_class_id(
        &self,
        faculty_id: i64,
        class_id: i64,
    ) -> Result<Vec<Quiz>> {
        self.fetch_all(
            Quizzes::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .filter(Column::ClassId.eq(class_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_id_with_questions(&self, id: i64) -> Result<Option<QuizDetail>> {
        let Some(quiz) = self.fetch_one(Quizzes::find_by_id(id)).await? else {
            return Ok(None);
        };

        let questions: Vec<QuizQuestion> = QuizQuestions::find()
            .filter(QuestionColumn::QuizId.eq(id))
            .order_by_asc(QuestionColumn::Position)
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("查询测验题目失败", e))?
            .into_iter()
            .map(|m| m.into_question())
            .collect();

        let questions = attach_options(&self.db, questions).await?;
        Ok(Some(QuizDetail { quiz, questions }))
    }
}
