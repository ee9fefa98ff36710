//! 直播课存储操作

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::live_classes::{Column, Entity as LiveClasses};
use crate::errors::Result;
use crate::models::live_classes::entities::{LiveClass, LiveClassStatus};
use crate::storage::LiveClassRepository;
use crate::utils::to_millis;

sea_orm_repository!(LiveClassStore, live_classes, LiveClass, into_live_class, "直播课");

#[async_trait]
impl LiveClassRepository for LiveClassStore {
    async fn find_by_faculty_id(&self, faculty_id: i64) -> Result<Vec<LiveClass>> {
        self.fetch_all(
            LiveClasses::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .order_by_asc(Column::ScheduledAt)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<LiveClass>> {
        self.fetch_all(
            LiveClasses::find()
                .filter(Column::ClassId.eq(class_id))
                .order_by_asc(Column::ScheduledAt)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_status(
        &self,
        class_id: i64,
        status: LiveClassStatus,
    ) -> Result<Vec<LiveClass>> {
        self.fetch_all(
            LiveClasses::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::ScheduledAt)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_status(&self, status: LiveClassStatus) -> Result<Vec<LiveClass>> {
        self.fetch_all(
            LiveClasses::find()
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_faculty_id_and_status(
        &self,
        faculty_id: i64,
        status: LiveClassStatus,
    ) -> Result<Vec<LiveClass>> {
        self.fetch_all(
            LiveClasses::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_scheduled_at_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<LiveClass>> {
        self.fetch_all(
            LiveClasses::find()
                .filter(Column::ScheduledAt.between(to_millis(start), to_millis(end)))
                .order_by_asc(Column::ScheduledAt)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_upcoming_by_class_id(
        &self,
        class_id: i64,
        from: DateTime<Utc>,
    ) -> Result<Vec<LiveClass>> {
        self.fetch_all(
            LiveClasses::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::Status.eq(LiveClassStatus::Scheduled.as_str()))
                .filter(Column::ScheduledAt.gte(to_millis(from)))
                .order_by_asc(Column::ScheduledAt)
                .order_by_asc(Column::Id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::live_classes::entities::{LiveClass, LiveClassStatus};
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::sea_orm_storage::test_support::{at, seed_class, seed_user, storage};
    use crate::storage::{Repository, Storage};

    struct Fixture {
        storage: SeaOrmStorage,
        faculty: i64,
        class: i64,
    }

    async fn fixture() -> Fixture {
        let storage = storage().await;
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let class = seed_class(&storage, "CSE-2A").await.id.unwrap();
        Fixture {
            storage,
            faculty,
            class,
        }
    }

    fn session(f: &Fixture, title: &str, minute: i64, status: LiveClassStatus) -> LiveClass {
        LiveClass {
            title: title.to_string(),
            faculty_id: f.faculty,
            class_id: f.class,
            subject: "Maths".to_string(),
            meeting_url: format!("https://meet.school.test/{title}"),
            scheduled_at: at(minute),
            duration_minutes: 45,
            status,
            created_at: at(0),
            ..Default::default()
        }
    }

    fn titles(sessions: Vec<LiveClass>) -> Vec<String> {
        sessions.into_iter().map(|s| s.title).collect()
    }

    #[tokio::test]
    async fn test_upcoming_only_scheduled_from_now() {
        let f = fixture().await;
        let live = f.storage.live_classes();
        for (title, minute, status) in [
            ("past", 0, LiveClassStatus::Scheduled),
            ("later", 240, LiveClassStatus::Scheduled),
            ("cancelled", 120, LiveClassStatus::Cancelled),
            ("boundary", 60, LiveClassStatus::Scheduled),
            ("running", 90, LiveClassStatus::Live),
        ] {
            live.save(session(&f, title, minute, status)).await.unwrap();
        }

        let upcoming = live.find_upcoming_by_class_id(f.class, at(60)).await.unwrap();
        assert_eq!(titles(upcoming), vec!["boundary", "later"]);
        assert!(
            live.find_upcoming_by_class_id(f.class, at(300))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_schedule_ordering_and_range() {
        let f = fixture().await;
        let live = f.storage.live_classes();
        for (title, minute) in [("c", 120), ("a", 0), ("b", 60)] {
            live.save(session(&f, title, minute, LiveClassStatus::Scheduled))
                .await
                .unwrap();
        }

        assert_eq!(titles(live.find_by_class_id(f.class).await.unwrap()), vec!["a", "b", "c"]);
        assert_eq!(titles(live.find_by_faculty_id(f.faculty).await.unwrap()), vec!["a", "b", "c"]);
        assert_eq!(
            titles(live.find_by_scheduled_at_between(at(0), at(60)).await.unwrap()),
            vec!["a", "b"]
        );
    }

    #[tokio::test]
    async fn test_status_transitions() {
        let f = fixture().await;
        let live = f.storage.live_classes();
        let mut lecture = live
            .save(session(&f, "lecture", 30, LiveClassStatus::Scheduled))
            .await
            .unwrap();

        lecture.status = LiveClassStatus::Completed;
        let lecture = live.save(lecture).await.unwrap();

        assert_eq!(
            live.find_by_status(LiveClassStatus::Completed).await.unwrap(),
            vec![lecture.clone()]
        );
        assert!(
            live.find_by_class_id_and_status(f.class, LiveClassStatus::Scheduled)
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            live.find_by_faculty_id_and_status(f.faculty, LiveClassStatus::Completed)
                .await
                .unwrap(),
            vec![lecture]
        );
    }
}
