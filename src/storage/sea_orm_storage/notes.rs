//! 笔记存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::notes::{Column, Entity as Notes};
use crate::errors::Result;
use crate::models::notes::entities::Note;
use crate::storage::NoteRepository;

sea_orm_repository!(NoteStore, notes, Note, into_note, "笔记");

#[async_trait]
impl NoteRepository for NoteStore {
    async fn find_by_created_by(&self, user_id: i64) -> Result<Vec<Note>> {
        self.fetch_all(
            Notes::find()
                .filter(Column::CreatedBy.eq(user_id))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_assigned_to(&self, user_id: i64) -> Result<Vec<Note>> {
        self.fetch_all(
            Notes::find()
                .filter(Column::AssignedTo.eq(user_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_public(&self, public: bool) -> Result<Vec<Note>> {
        self.fetch_all(
            Notes::find()
                .filter(Column::IsPublic.eq(public))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_created_by_and_public(&self, user_id: i64, public: bool) -> Result<Vec<Note>> {
        self.fetch_all(
            Notes::find()
                .filter(Column::CreatedBy.eq(user_id))
                .filter(Column::IsPublic.eq(public))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_created_by_or_public(&self, user_id: i64) -> Result<Vec<Note>> {
        self.fetch_all(
            Notes::find()
                .filter(
                    Condition::any()
                        .add(Column::CreatedBy.eq(user_id))
                        .add(Column::IsPublic.eq(true)),
                )
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::notes::entities::Note;
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{at, seed_user, storage};
    use crate::storage::{Repository, Storage};

    fn note(title: &str, created_by: i64, public: bool, minute: i64) -> Note {
        Note {
            title: title.to_string(),
            content: format!("{title} body"),
            created_by,
            public,
            created_at: at(minute),
            updated_at: at(minute),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_own_or_public_visibility() {
        let storage = storage().await;
        let me = seed_user(&storage, "me", UserRole::Student).await.id.unwrap();
        let other = seed_user(&storage, "other", UserRole::Faculty).await.id.unwrap();
        let notes = storage.notes();

        notes.save(note("mine-private", me, false, 0)).await.unwrap();
        notes.save(note("theirs-public", other, true, 10)).await.unwrap();
        notes.save(note("theirs-private", other, false, 20)).await.unwrap();
        notes.save(note("mine-public", me, true, 30)).await.unwrap();

        let titles: Vec<String> = notes
            .find_by_created_by_or_public(me)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["mine-public", "theirs-public", "mine-private"]);

        let theirs: Vec<String> = notes
            .find_by_created_by_or_public(other)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(theirs, vec!["mine-public", "theirs-private", "theirs-public"]);
    }

    #[tokio::test]
    async fn test_creator_and_assignee_filters() {
        let storage = storage().await;
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let student = seed_user(&storage, "stu", UserRole::Student).await.id.unwrap();
        let notes = storage.notes();

        let older = notes.save(note("older", faculty, true, 0)).await.unwrap();
        let mut assigned = note("for-student", faculty, false, 5);
        assigned.assigned_to = Some(student);
        let assigned = notes.save(assigned).await.unwrap();

        assert_eq!(
            notes.find_by_created_by(faculty).await.unwrap(),
            vec![assigned.clone(), older.clone()]
        );
        assert_eq!(notes.find_by_assigned_to(student).await.unwrap(), vec![assigned.clone()]);
        assert_eq!(notes.find_by_public(true).await.unwrap(), vec![older]);
        assert_eq!(
            notes
                .find_by_created_by_and_public(faculty, false)
                .await
                .unwrap(),
            vec![assigned]
        );
        assert!(notes.find_by_created_by(student).await.unwrap().is_empty());
    }
}
