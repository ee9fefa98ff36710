//! 通知存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entity::notifications::{Column, Entity as Notifications};
use crate::errors::Result;
use crate::models::notifications::entities::Notification;
use crate::storage::NotificationRepository;

sea_orm_repository!(
    NotificationStore,
    notifications,
    Notification,
    into_notification,
    "通知"
);

const RECENT_LIMIT: u64 = 10;

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Notification>> {
        self.fetch_all(
            Notifications::find()
                .filter(Column::UserId.eq(user_id))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_user_id_and_read(&self, user_id: i64, read: bool) -> Result<Vec<Notification>> {
        self.fetch_all(
            Notifications::find()
                .filter(Column::UserId.eq(user_id))
                .filter(Column::IsRead.eq(read))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn count_by_user_id_and_read(&self, user_id: i64, read: bool) -> Result<u64> {
        self.fetch_count(
            Notifications::find()
                .filter(Column::UserId.eq(user_id))
                .filter(Column::IsRead.eq(read)),
        )
        .await
    }

    async fn find_top10_by_user_id(&self, user_id: i64) -> Result<Vec<Notification>> {
        self.fetch_all(
            Notifications::find()
                .filter(Column::UserId.eq(user_id))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id)
                .limit(RECENT_LIMIT),
        )
        .await
    }
}
