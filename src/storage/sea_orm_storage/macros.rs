/// 为单表实体生成 SeaORM 仓库
///
/// 自动生成：
/// - Store 结构体与 new() 构造函数
/// - Repository trait 的全部通用方法
/// - fetch_all / fetch_one / fetch_count 查询辅助方法，供各实体的查询方法复用
///
/// 参数依次为 Store 名、`crate::entity` 下的模块名、业务模型、转换方法、日志用的中文名称。
macro_rules! sea_orm_repository {
    ($store:ident, $entity:ident, $record:ty, $into:ident, $label:literal) => {
        #[derive(Clone)]
        pub struct $store {
            pub(crate) db: sea_orm::DatabaseConnection,
        }

        impl $store {
            pub fn new(db: sea_orm::DatabaseConnection) -> Self {
                Self { db }
            }

            #[allow(dead_code)]
            async fn fetch_all(
                &self,
                select: sea_orm::Select<$crate::entity::$entity::Entity>,
            ) -> $crate::errors::Result<Vec<$record>> {
                let models = select.all(&self.db).await.map_err(|e| {
                    $crate::errors::TrackerError::from_db(concat!("查询", $label, "失败"), e)
                })?;

                Ok(models.into_iter().map(|m| m.$into()).collect())
            }

            #[allow(dead_code)]
            async fn fetch_one(
                &self,
                select: sea_orm::Select<$crate::entity::$entity::Entity>,
            ) -> $crate::errors::Result<Option<$record>> {
                let model = select.one(&self.db).await.map_err(|e| {
                    $crate::errors::TrackerError::from_db(concat!("查询", $label, "失败"), e)
                })?;

                Ok(model.map(|m| m.$into()))
            }

            #[allow(dead_code)]
            async fn fetch_count(
                &self,
                select: sea_orm::Select<$crate::entity::$entity::Entity>,
            ) -> $crate::errors::Result<u64> {
                use sea_orm::PaginatorTrait;

                select.count(&self.db).await.map_err(|e| {
                    $crate::errors::TrackerError::from_db(concat!("统计", $label, "失败"), e)
                })
            }
        }

        #[async_trait::async_trait]
        impl $crate::storage::Repository<$record, i64> for $store {
            async fn save(&self, record: $record) -> $crate::errors::Result<$record> {
                use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait};

                let exists = match record.id {
                    Some(id) => {
                        self.fetch_count($crate::entity::$entity::Entity::find_by_id(id))
                            .await?
                            > 0
                    }
                    None => false,
                };

                let mut active: $crate::entity::$entity::ActiveModel = record.into();
                let result = if exists {
                    active.update(&self.db).await
                } else {
                    // 新记录的 id 由数据库分配
                    active.id = NotSet;
                    active.insert(&self.db).await
                };
                let model = result.map_err(|e| {
                    $crate::errors::TrackerError::from_db(concat!("保存", $label, "失败"), e)
                })?;

                tracing::debug!("保存{} id={} (update={})", $label, model.id, exists);
                Ok(model.$into())
            }

            async fn find_by_id(&self, id: i64) -> $crate::errors::Result<Option<$record>> {
                use sea_orm::EntityTrait;

                self.fetch_one($crate::entity::$entity::Entity::find_by_id(id))
                    .await
            }

            async fn find_all(&self) -> $crate::errors::Result<Vec<$record>> {
                use sea_orm::{EntityTrait, QueryOrder};

                self.fetch_all(
                    $crate::entity::$entity::Entity::find()
                        .order_by_asc($crate::entity::$entity::Column::Id),
                )
                .await
            }

            async fn delete_by_id(&self, id: i64) -> $crate::errors::Result<bool> {
                use sea_orm::EntityTrait;

                let result = $crate::entity::$entity::Entity::delete_by_id(id)
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        $crate::errors::TrackerError::from_db(concat!("删除", $label, "失败"), e)
                    })?;

                tracing::debug!("删除{} id={} rows={}", $label, id, result.rows_affected);
                Ok(result.rows_affected > 0)
            }

            async fn delete_all(&self) -> $crate::errors::Result<u64> {
                use sea_orm::EntityTrait;

                let result = $crate::entity::$entity::Entity::delete_many()
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        $crate::errors::TrackerError::from_db(concat!("删除", $label, "失败"), e)
                    })?;

                tracing::debug!("清空{} rows={}", $label, result.rows_affected);
                Ok(result.rows_affected)
            }

            async fn exists_by_id(&self, id: i64) -> $crate::errors::Result<bool> {
                use sea_orm::EntityTrait;

                let count = self
                    .fetch_count($crate::entity::$entity::Entity::find_by_id(id))
                    .await?;
                Ok(count > 0)
            }

            async fn count(&self) -> $crate::errors::Result<u64> {
                use sea_orm::EntityTrait;

                self.fetch_count($crate::entity::$entity::Entity::find())
                    .await
            }
        }
    };
}
