//! 任务存储操作

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::users::{load_users, required_user};
use crate::entity::tasks::{Column, Entity as Tasks};
use crate::errors::Result;
use crate::models::tasks::{
    entities::{Task, TaskStatus},
    responses::TaskDetail,
};
use crate::storage::TaskRepository;
use crate::utils::to_millis;

sea_orm_repository!(TaskStore, tasks, Task, into_task, "任务");

impl TaskStore {
    /// 批量加载布置者与接收者
    async fn with_users(&self, tasks: Vec<Task>) -> Result<Vec<TaskDetail>> {
        let ids = tasks.iter().flat_map(|t| [t.assigned_by, t.assigned_to]);
        let users = load_users(&self.db, ids).await?;

        tasks
            .into_iter()
            .map(|task| -> Result<TaskDetail> {
                let context = format!("任务 {:?}", task.id);
                Ok(TaskDetail {
                    assigned_by: required_user(&users, task.assigned_by, &context)?,
                    assigned_to: required_user(&users, task.assigned_to, &context)?,
                    task,
                })
            })
            .collect()
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn find_by_assigned_to(&self, user_id: i64) -> Result<Vec<Task>> {
        self.fetch_all(
            Tasks::find()
                .filter(Column::AssignedTo.eq(user_id))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_assigned_by(&self, user_id: i64) -> Result<Vec<Task>> {
        self.fetch_all(
            Tasks::find()
                .filter(Column::AssignedBy.eq(user_id))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_assigned_to_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> Result<Vec<Task>> {
        self.fetch_all(
            Tasks::find()
                .filter(Column::AssignedTo.eq(user_id))
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>> {
        self.fetch_all(
            Tasks::find()
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<Task>> {
        self.fetch_all(
            Tasks::find()
                .filter(Column::ClassId.eq(class_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_due_date_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Task>> {
        self.fetch_all(
            Tasks::find()
                .filter(Column::DueDate.between(to_millis(start), to_millis(end)))
                .order_by_asc(Column::DueDate)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn count_by_assigned_to_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> Result<u64> {
        self.fetch_count(
            Tasks::find()
                .filter(Column::AssignedTo.eq(user_id))
                .filter(Column::Status.eq(status.as_str())),
        )
        .await
    }

    async fn find_by_id_with_users(&self, id: i64) -> Result<Option<TaskDetail>> {
        let Some(task) = self.fetch_one(Tasks::find_by_id(id)).await? else {
            return Ok(None);
        };
        Ok(self.with_users(vec![task]).await?.pop())
    }

    async fn find_all_with_users(&self) -> Result<Vec<TaskDetail>> {
        let tasks = self
            .fetch_all(Tasks::find().order_by_asc(Column::Id))
            .await?;
        self.with_users(tasks).await
    }

    async fn find_by_assigned_to_with_users(&self, user_id: i64) -> Result<Vec<TaskDetail>> {
        let tasks = self.find_by_assigned_to(user_id).await?;
        self.with_users(tasks).await
    }
}
