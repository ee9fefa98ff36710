//! 任务完成报告存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::task_submissions::{Column, Entity as TaskSubmissions};
use crate::errors::Result;
use crate::models::tasks::entities::{TaskSubmission, TaskSubmissionStatus};
use crate::storage::TaskSubmissionRepository;

sea_orm_repository!(
    TaskSubmissionStore,
    task_submissions,
    TaskSubmission,
    into_task_submission,
    "任务报告"
);

#[async_trait]
impl TaskSubmissionRepository for TaskSubmissionStore {
    async fn find_by_task_id(&self, task_id: i64) -> Result<Vec<TaskSubmission>> {
        self.fetch_all(
            TaskSubmissions::find()
                .filter(Column::TaskId.eq(task_id))
                .order_by_desc(Column::SubmittedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_submitted_by(&self, user_id: i64) -> Result<Vec<TaskSubmission>> {
        self.fetch_all(
            TaskSubmissions::find()
                .filter(Column::SubmittedBy.eq(user_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_status(&self, status: TaskSubmissionStatus) -> Result<Vec<TaskSubmission>> {
        self.fetch_all(
            TaskSubmissions::find()
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_task_id_and_status(
        &self,
        task_id: i64,
        status: TaskSubmissionStatus,
    ) -> Result<Vec<TaskSubmission>> {
        self.fetch_all(
            TaskSubmissions::find()
                .filter(Column::TaskId.eq(task_id))
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_task_id_and_submitted_by(
        &self,
        task_id: i64,
        user_id: i64,
    ) -> Result<Option<TaskSubmission>> {
        self.fetch_one(
            TaskSubmissions::find()
                .filter(Column::TaskId.eq(task_id))
                .filter(Column::SubmittedBy.eq(user_id)),
        )
        .await
    }

    async fn exists_by_task_id_and_submitted_by(
        &self,
        task_id: i64,
        user_id: i64,
    ) -> Result<bool> {
        let count = self
            .fetch_count(
                TaskSubmissions::find()
                    .filter(Column::TaskId.eq(task_id))
                    .filter(Column::SubmittedBy.eq(user_id)),
            )
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::tasks::entities::{Task, TaskSubmission, TaskSubmissionStatus};
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{at, seed_user, storage};
    use crate::storage::{Repository, Storage};

    #[tokio::test]
    async fn test_report_lifecycle() {
        let storage = storage().await;
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let ta = seed_user(&storage, "ta", UserRole::Faculty).await.id.unwrap();
        let other = seed_user(&storage, "other", UserRole::Faculty).await.id.unwrap();
        let task_id = storage
            .tasks()
            .save(Task {
                title: "Prepare lab".to_string(),
                assigned_by: faculty,
                assigned_to: ta,
                created_at: at(0),
                updated_at: at(0),
                ..Default::default()
            })
            .await
            .unwrap()
            .id
            .unwrap();

        let first = storage
            .task_submissions()
            .save(TaskSubmission {
                task_id,
                submitted_by: ta,
                content: Some("done".to_string()),
                submitted_at: at(10),
                ..Default::default()
            })
            .await
            .unwrap();
        let mut second = storage
            .task_submissions()
            .save(TaskSubmission {
                task_id,
                submitted_by: other,
                submitted_at: at(20),
                ..Default::default()
            })
            .await
            .unwrap();

        let reports = storage.task_submissions();
        let newest_first: Vec<i64> = reports
            .find_by_task_id(task_id)
            .await
            .unwrap()
            .iter()
            .filter_map(|r| r.id)
            .collect();
        assert_eq!(newest_first, vec![second.id.unwrap(), first.id.unwrap()]);

        second.status = TaskSubmissionStatus::Approved;
        second.reviewer_remarks = Some("ok".to_string());
        second.reviewed_at = Some(at(30));
        reports.save(second.clone()).await.unwrap();

        let approved = reports
            .find_by_task_id_and_status(task_id, TaskSubmissionStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved, vec![second]);
        assert_eq!(
            reports
                .find_by_status(TaskSubmissionStatus::Pending)
                .await
                .unwrap(),
            vec![first.clone()]
        );
        assert_eq!(
            reports
                .find_by_task_id_and_submitted_by(task_id, ta)
                .await
                .unwrap(),
            Some(first)
        );
        assert!(reports.exists_by_task_id_and_submitted_by(task_id, other).await.unwrap());
        assert!(!reports.exists_by_task_id_and_submitted_by(task_id, faculty).await.unwrap());
        assert_eq!(reports.find_by_submitted_by(ta).await.unwrap().len(), 1);
    }
}
