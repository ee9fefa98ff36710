//! 班级存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::classes::{Column, Entity as Classes};
use crate::errors::Result;
use crate::models::classes::entities::Class;
use crate::storage::ClassRepository;

sea_orm_repository!(ClassStore, classes, Class, into_class, "班级");

#[async_trait]
impl ClassRepository for ClassStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Class>> {
        self.fetch_one(Classes::find().filter(Column::Name.eq(name)))
            .await
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let count = self
            .fetch_count(Classes::find().filter(Column::Name.eq(name)))
            .await?;
        Ok(count > 0)
    }

    async fn find_by_department(&self, department: &str) -> Result<Vec<Class>> {
        self.fetch_all(
            Classes::find()
                .filter(Column::Department.eq(department))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_year_and_division(&self, year: i32, division: &str) -> Result<Vec<Class>> {
        self.fetch_all(
            Classes::find()
                .filter(Column::Year.eq(year))
                .filter(Column::Division.eq(division))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_academic_year(&self, academic_year: &str) -> Result<Vec<Class>> {
        self.fetch_all(
            Classes::find()
                .filter(Column::AcademicYear.eq(academic_year))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_active(&self, active: bool) -> Result<Vec<Class>> {
        self.fetch_all(
            Classes::find()
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_department_and_year(
        &self,
        department: &str,
        year: i32,
    ) -> Result<Vec<Class>> {
        self.fetch_all(
            Classes::find()
                .filter(Column::Department.eq(department))
                .filter(Column::Year.eq(year))
                .order_by_asc(Column::Id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::sea_orm_storage::test_support::{class, seed_class, storage};
    use crate::storage::{Repository, Storage};

    #[tokio::test]
    async fn test_save_assigns_id_and_updates_in_place() {
        let storage = storage().await;
        let mut saved = seed_class(&storage, "CSE-2A").await;
        let id = saved.id.expect("id assigned on insert");

        saved.active = false;
        let updated = storage.classes().save(saved).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(storage.classes().count().await.unwrap(), 1);

        let found = storage.classes().find_by_id(id).await.unwrap().unwrap();
        assert!(!found.active);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts() {
        let storage = storage().await;
        let classes = storage.classes();
        let mut record = class("CSE-3B");
        record.id = Some(999);

        let first = classes.save(record).await.unwrap();
        let first_id = first.id.unwrap();
        assert_ne!(first_id, 999);
        assert!(!classes.exists_by_id(999).await.unwrap());
        assert!(classes.exists_by_id(first_id).await.unwrap());

        let second = classes.save(class("CSE-1A")).await.unwrap();
        assert!(second.id.unwrap() > first_id);
        assert_eq!(classes.find_all().await.unwrap(), vec![first, second]);
        assert_eq!(classes.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let storage = storage().await;
        let saved = seed_class(&storage, "CSE-2A").await;

        let found = storage.classes().find_by_name("CSE-2A").await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(storage.classes().find_by_name("ECE-1A").await.unwrap(), None);
        assert!(storage.classes().exists_by_name("CSE-2A").await.unwrap());
        assert!(!storage.classes().exists_by_name("ECE-1A").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_constraint_violation() {
        let storage = storage().await;
        seed_class(&storage, "CSE-2A").await;

        let err = storage.classes().save(class("CSE-2A")).await.unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn test_combined_filters() {
        let storage = storage().await;
        seed_class(&storage, "CSE-2A").await;
        let mut other = class("CSE-3B");
        other.year = 3;
        other.division = "B".to_string();
        storage.classes().save(other).await.unwrap();
        let mut ece = class("ECE-2A");
        ece.department = "ECE".to_string();
        ece.active = false;
        storage.classes().save(ece).await.unwrap();

        let by_year = storage
            .classes()
            .find_by_year_and_division(2, "A")
            .await
            .unwrap();
        assert_eq!(by_year.len(), 2);

        let cse_second_year = storage
            .classes()
            .find_by_department_and_year("CSE", 2)
            .await
            .unwrap();
        assert_eq!(cse_second_year.len(), 1);
        assert_eq!(cse_second_year[0].name, "CSE-2A");

        assert_eq!(storage.classes().find_by_department("CSE").await.unwrap().len(), 2);
        assert_eq!(storage.classes().find_by_active(false).await.unwrap().len(), 1);
        assert_eq!(
            storage
                .classes()
                .find_by_academic_year("2024-25")
                .await
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn test_delete_by_id_and_exists() {
        let storage = storage().await;
        let saved = seed_class(&storage, "CSE-2A").await;
        let id = saved.id.unwrap();

        assert!(storage.classes().exists_by_id(id).await.unwrap());
        assert!(storage.classes().delete_by_id(id).await.unwrap());
        assert!(!storage.classes().exists_by_id(id).await.unwrap());
        assert!(!storage.classes().delete_by_id(id).await.unwrap());
    }
}
