//! 考勤存储操作

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::attendance::{Column, Entity as AttendanceRecords};
use crate::errors::Result;
use crate::models::attendance::entities::{Attendance, AttendanceStatus};
use crate::storage::AttendanceRepository;

sea_orm_repository!(AttendanceStore, attendance, Attendance, into_attendance, "考勤记录");

#[async_trait]
impl AttendanceRepository for AttendanceStore {
    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<Attendance>> {
        self.fetch_all(
            AttendanceRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .order_by_asc(Column::AttendanceDate)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_student_id_and_date(
        &self,
        student_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.fetch_all(
            AttendanceRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::AttendanceDate.eq(date))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_date(
        &self,
        class_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.fetch_all(
            AttendanceRecords::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::AttendanceDate.eq(date))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_faculty_id_and_date(
        &self,
        faculty_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.fetch_all(
            AttendanceRecords::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .filter(Column::AttendanceDate.eq(date))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_student_id_and_date_and_faculty_id(
        &self,
        student_id: i64,
        date: NaiveDate,
        faculty_id: i64,
    ) -> Result<Option<Attendance>> {
        self.fetch_one(
            AttendanceRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::AttendanceDate.eq(date))
                .filter(Column::FacultyId.eq(faculty_id)),
        )
        .await
    }

    async fn exists_by_student_id_and_date_and_faculty_id(
        &self,
        student_id: i64,
        date: NaiveDate,
        faculty_id: i64,
    ) -> Result<bool> {
        let count = self
            .fetch_count(
                AttendanceRecords::find()
                    .filter(Column::StudentId.eq(student_id))
                    .filter(Column::AttendanceDate.eq(date))
                    .filter(Column::FacultyId.eq(faculty_id)),
            )
            .await?;
        Ok(count > 0)
    }

    async fn find_by_student_id_and_date_between(
        &self,
        student_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.fetch_all(
            AttendanceRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::AttendanceDate.between(start, end))
                .order_by_asc(Column::AttendanceDate)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_date_between(
        &self,
        class_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.fetch_all(
            AttendanceRecords::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::AttendanceDate.between(start, end))
                .order_by_asc(Column::AttendanceDate)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn count_by_student_id_and_status(
        &self,
        student_id: i64,
        status: AttendanceStatus,
    ) -> Result<u64> {
        self.fetch_count(
            AttendanceRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::Status.eq(status.as_str())),
        )
        .await
    }

    async fn count_by_student_id_and_status_and_date_between(
        &self,
        student_id: i64,
        status: AttendanceStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u64> {
        self.fetch_count(
            AttendanceRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::Status.eq(status.as_str()))
                .filter(Column::AttendanceDate.between(start, end)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::attendance::entities::{Attendance, AttendanceStatus};
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::sea_orm_storage::test_support::{at, seed_class, seed_user, storage};
    use crate::storage::{Repository, Storage};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    struct Fixture {
        storage: SeaOrmStorage,
        student: i64,
        faculty: i64,
        class: i64,
    }

    async fn fixture() -> Fixture {
        let storage = storage().await;
        let student = seed_user(&storage, "stu", UserRole::Student).await.id.unwrap();
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let class = seed_class(&storage, "CSE-2A").await.id.unwrap();
        Fixture {
            storage,
            student,
            faculty,
            class,
        }
    }

    fn record(f: &Fixture, date: NaiveDate, status: AttendanceStatus) -> Attendance {
        Attendance {
            student_id: f.student,
            class_id: f.class,
            faculty_id: f.faculty,
            subject: Some("Maths".to_string()),
            date,
            status,
            marked_at: at(0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_date_range_is_inclusive() {
        let f = fixture().await;
        for d in [1, 5, 10, 11] {
            f.storage
                .attendance()
                .save(record(&f, day(d), AttendanceStatus::Present))
                .await
                .unwrap();
        }

        let found = f
            .storage
            .attendance()
            .find_by_student_id_and_date_between(f.student, day(1), day(10))
            .await
            .unwrap();
        let dates: Vec<NaiveDate> = found.iter().map(|a| a.date).collect();
        assert_eq!(dates, vec![day(1), day(5), day(10)]);

        let by_class = f
            .storage
            .attendance()
            .find_by_class_id_and_date_between(f.class, day(5), day(11))
            .await
            .unwrap();
        assert_eq!(by_class.len(), 3);
    }

    #[tokio::test]
    async fn test_unique_triple_lookup() {
        let f = fixture().await;
        let saved = f
            .storage
            .attendance()
            .save(record(&f, day(3), AttendanceStatus::Late))
            .await
            .unwrap();

        let found = f
            .storage
            .attendance()
            .find_by_student_id_and_date_and_faculty_id(f.student, day(3), f.faculty)
            .await
            .unwrap();
        assert_eq!(found, Some(saved));
        assert!(
            f.storage
                .attendance()
                .exists_by_student_id_and_date_and_faculty_id(f.student, day(3), f.faculty)
                .await
                .unwrap()
        );
        assert!(
            !f.storage
                .attendance()
                .exists_by_student_id_and_date_and_faculty_id(f.student, day(4), f.faculty)
                .await
                .unwrap()
        );

        let err = f
            .storage
            .attendance()
            .save(record(&f, day(3), AttendanceStatus::Present))
            .await
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn test_counts_by_status() {
        let f = fixture().await;
        let statuses = [
            (1, AttendanceStatus::Present),
            (2, AttendanceStatus::Absent),
            (3, AttendanceStatus::Present),
            (20, AttendanceStatus::Present),
        ];
        for (d, status) in statuses {
            f.storage
                .attendance()
                .save(record(&f, day(d), status))
                .await
                .unwrap();
        }

        let attendance = f.storage.attendance();
        assert_eq!(
            attendance
                .count_by_student_id_and_status(f.student, AttendanceStatus::Present)
                .await
                .unwrap(),
            3
        );
        assert_eq!(
            attendance
                .count_by_student_id_and_status_and_date_between(
                    f.student,
                    AttendanceStatus::Present,
                    day(1),
                    day(3)
                )
                .await
                .unwrap(),
            2
        );
        assert_eq!(
            attendance
                .count_by_student_id_and_status(f.student, AttendanceStatus::Excused)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_find_by_date() {
        let f = fixture().await;
        f.storage
            .attendance()
            .save(record(&f, day(7), AttendanceStatus::Present))
            .await
            .unwrap();

        let attendance = f.storage.attendance();
        assert_eq!(
            attendance
                .find_by_class_id_and_date(f.class, day(7))
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            attendance
                .find_by_faculty_id_and_date(f.faculty, day(7))
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(
            attendance
                .find_by_student_id_and_date(f.student, day(8))
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(attendance.find_by_student_id(f.student).await.unwrap().len(), 1);
    }
}
