//! 考核类型存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::assessment_types::{Column, Entity as AssessmentTypes};
use crate::errors::Result;
use crate::models::marks::entities::AssessmentType;
use crate::storage::AssessmentTypeRepository;

sea_orm_repository!(
    AssessmentTypeStore,
    assessment_types,
    AssessmentType,
    into_assessment_type,
    "考核类型"
);

#[async_trait]
impl AssessmentTypeRepository for AssessmentTypeStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<AssessmentType>> {
        self.fetch_one(AssessmentTypes::find().filter(Column::Name.eq(name)))
            .await
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let count = self
            .fetch_count(AssessmentTypes::find().filter(Column::Name.eq(name)))
            .await?;
        Ok(count > 0)
    }

    async fn find_by_created_by(&self, user_id: i64) -> Result<Vec<AssessmentType>> {
        self.fetch_all(
            AssessmentTypes::find()
                .filter(Column::CreatedBy.eq(user_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_active(&self, active: bool) -> Result<Vec<AssessmentType>> {
        self.fetch_all(
            AssessmentTypes::find()
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_created_by_and_active(
        &self,
        user_id: i64,
        active: bool,
    ) -> Result<Vec<AssessmentType>> {
        self.fetch_all(
            AssessmentTypes::find()
                .filter(Column::CreatedBy.eq(user_id))
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::marks::entities::AssessmentType;
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{at, seed_user, storage};
    use crate::storage::{Repository, Storage};

    fn assessment(name: &str, created_by: i64, active: bool) -> AssessmentType {
        AssessmentType {
            name: name.to_string(),
            description: Some(format!("{name} exam")),
            max_marks: Some(50.0),
            created_by,
            active,
            created_at: at(0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_name_is_unique() {
        let storage = storage().await;
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let types = storage.assessment_types();

        assert!(!types.exists_by_name("Quiz").await.unwrap());
        let saved = types.save(assessment("Quiz", faculty, true)).await.unwrap();
        assert!(types.exists_by_name("Quiz").await.unwrap());
        assert_eq!(types.find_by_name("Quiz").await.unwrap(), Some(saved));
        assert!(types.find_by_name("quiz").await.unwrap().is_none());

        let err = types
            .save(assessment("Quiz", faculty, false))
            .await
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn test_active_filters() {
        let storage = storage().await;
        let alice = seed_user(&storage, "alice", UserRole::Faculty).await.id.unwrap();
        let bob = seed_user(&storage, "bob", UserRole::Faculty).await.id.unwrap();
        let types = storage.assessment_types();

        types.save(assessment("Midterm", alice, true)).await.unwrap();
        types.save(assessment("Retired", alice, false)).await.unwrap();
        types.save(assessment("Final", bob, true)).await.unwrap();

        assert_eq!(types.find_by_active(true).await.unwrap().len(), 2);
        assert_eq!(types.find_by_created_by(alice).await.unwrap().len(), 2);
        let inactive = types.find_by_created_by_and_active(alice, false).await.unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].name, "Retired");
        assert!(
            types
                .find_by_created_by_and_active(bob, false)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
