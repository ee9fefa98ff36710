//! 提交存储操作

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::users::{load_users, required_user};
use crate::entity::submissions::{Column, Entity as Submissions};
use crate::entity::tasks::{Column as TaskColumn, Entity as Tasks};
use crate::errors::{Result, TrackerError};
use crate::models::tasks::{
    entities::{Submission, SubmissionStatus, Task},
    responses::SubmissionDetail,
};
use crate::storage::SubmissionRepository;

sea_orm_repository!(SubmissionStore, submissions, Submission, into_submission, "提交");

impl SubmissionStore {
    /// 批量加载任务、任务布置者和提交学生
    async fn with_details(&self, submissions: Vec<Submission>) -> Result<Vec<SubmissionDetail>> {
        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        let task_ids: BTreeSet<i64> = submissions.iter().map(|s| s.task_id).collect();
        let tasks: HashMap<i64, Task> = Tasks::find()
            .filter(TaskColumn::Id.is_in(task_ids))
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("查询提交关联任务失败", e))?
            .into_iter()
            .map(|m| (m.id, m.into_task()))
            .collect();

        let user_ids = submissions
            .iter()
            .map(|s| s.student_id)
            .chain(tasks.values().map(|t| t.assigned_by));
        let users = load_users(&self.db, user_ids).await?;

        submissions
            .into_iter()
            .map(|submission| -> Result<SubmissionDetail> {
                let context = format!("提交 {:?}", submission.id);
                let task = tasks.get(&submission.task_id).cloned().ok_or_else(|| {
                    TrackerError::missing_association(format!(
                        "{context} 引用的任务 {} 不存在",
                        submission.task_id
                    ))
                })?;
                Ok(SubmissionDetail {
                    task_assigned_by: required_user(&users, task.assigned_by, &context)?,
                    student: required_user(&users, submission.student_id, &context)?,
                    task,
                    submission,
                })
            })
            .collect()
    }
}

#[async_trait]
impl SubmissionRepository for SubmissionStore {
    async fn find_by_task_id(&self, task_id: i64) -> Result<Vec<Submission>> {
        self.fetch_all(
            Submissions::find()
                .filter(Column::TaskId.eq(task_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.fetch_all(
            Submissions::find()
                .filter(Column::StudentId.eq(student_id))
                .order_by_desc(Column::SubmittedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_status(&self, status: SubmissionStatus) -> Result<Vec<Submission>> {
        self.fetch_all(
            Submissions::find()
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_task_id_and_student_id(
        &self,
        task_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.fetch_one(
            Submissions::find()
                .filter(Column::TaskId.eq(task_id))
                .filter(Column::StudentId.eq(student_id)),
        )
        .await
    }

    async fn exists_by_task_id_and_student_id(
        &self,
        task_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        let count = self
            .fetch_count(
                Submissions::find()
                    .filter(Column::TaskId.eq(task_id))
                    .filter(Column::StudentId.eq(student_id)),
            )
            .await?;
        Ok(count > 0)
    }

    async fn count_by_task_id(&self, task_id: i64) -> Result<u64> {
        self.fetch_count(Submissions::find().filter(Column::TaskId.eq(task_id)))
            .await
    }

    async fn find_by_id_with_details(&self, id: i64) -> Result<Option<SubmissionDetail>> {
        let Some(submission) = self.fetch_one(Submissions::find_by_id(id)).await? else {
            return Ok(None);
        };
        Ok(self.with_details(vec![submission]).await?.pop())
    }

    async fn find_by_task_id_with_details(&self, task_id: i64) -> Result<Vec<SubmissionDetail>> {
        let submissions = self.find_by_task_id(task_id).await?;
        self.with_details(submissions).await
    }

    async fn find_by_student_id_with_details(
        &self,
        student_id: i64,
    ) -> Result<Vec<SubmissionDetail>> {
        let submissions = self.find_by_student_id(student_id).await?;
        self.with_details(submissions).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::tasks::entities::{Submission, SubmissionStatus, Task};
    use crate::models::users::entities::{User, UserRole};
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::sea_orm_storage::test_support::{at, seed_user, storage};
    use crate::storage::{Repository, Storage};

    struct Fixture {
        storage: SeaOrmStorage,
        faculty: User,
        students: Vec<User>,
        task: Task,
    }

    async fn fixture() -> Fixture {
        let storage = storage().await;
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await;
        let mut students = Vec::new();
        for name in ["s1", "s2"] {
            students.push(seed_user(&storage, name, UserRole::Student).await);
        }
        let task = storage
            .tasks()
            .save(Task {
                title: "Lab report".to_string(),
                assigned_by: faculty.id.unwrap(),
                assigned_to: students[0].id.unwrap(),
                created_at: at(0),
                updated_at: at(0),
                ..Default::default()
            })
            .await
            .unwrap();
        Fixture {
            storage,
            faculty,
            students,
            task,
        }
    }

    fn submission(task_id: i64, student_id: i64, minute: i64) -> Submission {
        Submission {
            task_id,
            student_id,
            content: Some("answer".to_string()),
            status: SubmissionStatus::Submitted,
            submitted_at: at(minute),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_one_submission_per_task_and_student() {
        let f = fixture().await;
        let task_id = f.task.id.unwrap();
        let student_id = f.students[0].id.unwrap();
        let saved = f
            .storage
            .submissions()
            .save(submission(task_id, student_id, 5))
            .await
            .unwrap();

        assert_eq!(
            f.storage
                .submissions()
                .find_by_task_id_and_student_id(task_id, student_id)
                .await
                .unwrap(),
            Some(saved)
        );
        assert!(
            f.storage
                .submissions()
                .exists_by_task_id_and_student_id(task_id, student_id)
                .await
                .unwrap()
        );

        let err = f
            .storage
            .submissions()
            .save(submission(task_id, student_id, 6))
            .await
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn test_counts_and_status() {
        let f = fixture().await;
        let task_id = f.task.id.unwrap();
        assert_eq!(f.storage.submissions().count_by_task_id(task_id).await.unwrap(), 0);

        for (i, student) in f.students.iter().enumerate() {
            let mut s = submission(task_id, student.id.unwrap(), i as i64);
            if i == 1 {
                s.status = SubmissionStatus::Graded;
                s.score = Some(8.5);
            }
            f.storage.submissions().save(s).await.unwrap();
        }

        assert_eq!(f.storage.submissions().count_by_task_id(task_id).await.unwrap(), 2);
        let graded = f
            .storage
            .submissions()
            .find_by_status(SubmissionStatus::Graded)
            .await
            .unwrap();
        assert_eq!(graded.len(), 1);
        assert_eq!(graded[0].score, Some(8.5));
    }

    #[tokio::test]
    async fn test_eager_load_with_details() {
        let f = fixture().await;
        let task_id = f.task.id.unwrap();
        let student = f.students[1].clone();
        let saved = f
            .storage
            .submissions()
            .save(submission(task_id, student.id.unwrap(), 3))
            .await
            .unwrap();

        let detail = f
            .storage
            .submissions()
            .find_by_id_with_details(saved.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.submission, saved);
        assert_eq!(detail.task, f.task);
        assert_eq!(detail.task_assigned_by, f.faculty);
        assert_eq!(detail.student, student);

        let by_task = f
            .storage
            .submissions()
            .find_by_task_id_with_details(task_id)
            .await
            .unwrap();
        assert_eq!(by_task, vec![detail.clone()]);
        let by_student = f
            .storage
            .submissions()
            .find_by_student_id_with_details(student.id.unwrap())
            .await
            .unwrap();
        assert_eq!(by_student, vec![detail]);
    }

    #[tokio::test]
    async fn test_find_by_student_id_is_newest_first() {
        let f = fixture().await;
        let student_id = f.students[0].id.unwrap();
        let faculty_id = f.faculty.id.unwrap();
        let second_task = f
            .storage
            .tasks()
            .save(Task {
                title: "Essay".to_string(),
                assigned_by: faculty_id,
                assigned_to: student_id,
                created_at: at(1),
                updated_at: at(1),
                ..Default::default()
            })
            .await
            .unwrap();

        f.storage
            .submissions()
            .save(submission(f.task.id.unwrap(), student_id, 10))
            .await
            .unwrap();
        f.storage
            .submissions()
            .save(submission(second_task.id.unwrap(), student_id, 20))
            .await
            .unwrap();

        let found = f
            .storage
            .submissions()
            .find_by_student_id(student_id)
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].task_id, second_task.id.unwrap());
        assert!(found[0].submitted_at > found[1].submitted_at);
    }
}
