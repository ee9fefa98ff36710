//! 学习资源存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};

use crate::entity::resources::{Column, Entity as Resources};
use crate::errors::Result;
use crate::models::resources::entities::{Resource, ResourceType};
use crate::storage::ResourceRepository;

sea_orm_repository!(ResourceStore, resources, Resource, into_resource, "资源");

/// 资源列表统一按上传时间倒序
fn newest_first(query: Select<Resources>) -> Select<Resources> {
    query
        .order_by_desc(Column::UploadedAt)
        .order_by_desc(Column::Id)
}

#[async_trait]
impl ResourceRepository for ResourceStore {
    async fn find_by_uploaded_by(&self, user_id: i64) -> Result<Vec<Resource>> {
        self.fetch_all(newest_first(
            Resources::find().filter(Column::UploadedBy.eq(user_id)),
        ))
        .await
    }

    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<Resource>> {
        self.fetch_all(newest_first(
            Resources::find().filter(Column::ClassId.eq(class_id)),
        ))
        .await
    }

    async fn find_by_subject(&self, subject: &str) -> Result<Vec<Resource>> {
        self.fetch_all(newest_first(
            Resources::find().filter(Column::Subject.eq(subject)),
        ))
        .await
    }

    async fn find_by_resource_type(&self, resource_type: ResourceType) -> Result<Vec<Resource>> {
        self.fetch_all(newest_first(
            Resources::find().filter(Column::ResourceType.eq(resource_type.as_str())),
        ))
        .await
    }

    async fn find_by_public(&self, public: bool) -> Result<Vec<Resource>> {
        self.fetch_all(newest_first(
            Resources::find().filter(Column::IsPublic.eq(public)),
        ))
        .await
    }

    async fn find_by_class_id_and_subject(
        &self,
        class_id: i64,
        subject: &str,
    ) -> Result<Vec<Resource>> {
        self.fetch_all(newest_first(
            Resources::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::Subject.eq(subject)),
        ))
        .await
    }

    async fn find_by_class_id_and_public(
        &self,
        class_id: i64,
        public: bool,
    ) -> Result<Vec<Resource>> {
        self.fetch_all(newest_first(
            Resources::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::IsPublic.eq(public)),
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::resources::entities::{Resource, ResourceType};
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{at, seed_class, seed_user, storage};
    use crate::storage::{Repository, Storage};

    fn resource(
        title: &str,
        subject: &str,
        resource_type: ResourceType,
        class_id: Option<i64>,
        uploaded_by: i64,
        minute: i64,
    ) -> Resource {
        Resource {
            title: title.to_string(),
            subject: subject.to_string(),
            resource_type,
            url: format!("https://files.school.test/{title}"),
            class_id,
            uploaded_by,
            public: class_id.is_none(),
            uploaded_at: at(minute),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_lists_are_newest_first() {
        let storage = storage().await;
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let class = seed_class(&storage, "CSE-2A").await.id.unwrap();
        let resources = storage.resources();

        for (title, minute) in [("week1", 0), ("week3", 20), ("week2", 10)] {
            resources
                .save(resource(title, "Maths", ResourceType::Document, Some(class), faculty, minute))
                .await
                .unwrap();
        }

        let titles: Vec<String> = resources
            .find_by_class_id(class)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["week3", "week2", "week1"]);
        assert_eq!(
            resources.find_by_uploaded_by(faculty).await.unwrap(),
            resources.find_by_class_id_and_subject(class, "Maths").await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_type_and_visibility_filters() {
        let storage = storage().await;
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let class = seed_class(&storage, "CSE-2A").await.id.unwrap();
        let resources = storage.resources();

        let shared = resources
            .save(resource("intro", "Physics", ResourceType::Video, None, faculty, 0))
            .await
            .unwrap();
        let lecture = resources
            .save(resource("slides", "Physics", ResourceType::Presentation, Some(class), faculty, 5))
            .await
            .unwrap();

        assert_eq!(
            resources.find_by_resource_type(ResourceType::Video).await.unwrap(),
            vec![shared.clone()]
        );
        assert!(
            resources
                .find_by_resource_type(ResourceType::Link)
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(resources.find_by_public(true).await.unwrap(), vec![shared]);
        assert_eq!(
            resources.find_by_class_id_and_public(class, false).await.unwrap(),
            vec![lecture.clone()]
        );
        assert_eq!(resources.find_by_subject("Physics").await.unwrap().len(), 2);
        assert_eq!(
            resources.find_by_subject("Physics").await.unwrap()[0],
            lecture
        );
    }
}
