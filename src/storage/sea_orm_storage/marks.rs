//! 成绩存储操作

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::marks::{Column, Entity as MarksRecords};
use crate::errors::Result;
use crate::models::marks::entities::Marks;
use crate::storage::MarksRepository;

sea_orm_repository!(MarksStore, marks, Marks, into_marks, "成绩");

#[async_trait]
impl MarksRepository for MarksStore {
    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<Marks>> {
        self.fetch_all(
            MarksRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_student_id_and_subject(
        &self,
        student_id: i64,
        subject: &str,
    ) -> Result<Vec<Marks>> {
        self.fetch_all(
            MarksRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::Subject.eq(subject))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_subject(
        &self,
        class_id: i64,
        subject: &str,
    ) -> Result<Vec<Marks>> {
        self.fetch_all(
            MarksRecords::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::Subject.eq(subject))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_assessment_type_id(&self, assessment_type_id: i64) -> Result<Vec<Marks>> {
        self.fetch_all(
            MarksRecords::find()
                .filter(Column::AssessmentTypeId.eq(assessment_type_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_subject_and_assessment_type_id(
        &self,
        class_id: i64,
        subject: &str,
        assessment_type_id: i64,
    ) -> Result<Vec<Marks>> {
        self.fetch_all(
            MarksRecords::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::Subject.eq(subject))
                .filter(Column::AssessmentTypeId.eq(assessment_type_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_entered_by(&self, faculty_id: i64) -> Result<Vec<Marks>> {
        self.fetch_all(
            MarksRecords::find()
                .filter(Column::EnteredBy.eq(faculty_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_student_id_and_subject_and_assessment_type_id(
        &self,
        student_id: i64,
        subject: &str,
        assessment_type_id: i64,
    ) -> Result<Option<Marks>> {
        self.fetch_one(
            MarksRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::Subject.eq(subject))
                .filter(Column::AssessmentTypeId.eq(assessment_type_id))
                .order_by_desc(Column::AssessmentDate)
                .order_by_desc(Column::Id),
        )
        .await
    }

    async fn find_by_student_id_and_date_between(
        &self,
        student_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Marks>> {
        self.fetch_all(
            MarksRecords::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::AssessmentDate.between(start, end))
                .order_by_asc(Column::AssessmentDate)
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn exists_by_assessment_type_id(&self, assessment_type_id: i64) -> Result<bool> {
        let count = self
            .fetch_count(MarksRecords::find().filter(Column::AssessmentTypeId.eq(assessment_type_id)))
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::marks::entities::{AssessmentType, Marks};
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::sea_orm_storage::test_support::{at, seed_class, seed_user, storage};
    use crate::storage::{Repository, Storage};

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, d).unwrap()
    }

    struct Fixture {
        storage: SeaOrmStorage,
        student: i64,
        faculty: i64,
        class: i64,
        midterm: i64,
        final_exam: i64,
    }

    async fn fixture() -> Fixture {
        let storage = storage().await;
        let student = seed_user(&storage, "stu", UserRole::Student).await.id.unwrap();
        let faculty = seed_user(&storage, "fac", UserRole::Faculty).await.id.unwrap();
        let class = seed_class(&storage, "CSE-2A").await.id.unwrap();
        let mut types = Vec::new();
        for name in ["Midterm", "Final"] {
            let saved = storage
                .assessment_types()
                .save(AssessmentType {
                    name: name.to_string(),
                    max_marks: Some(100.0),
                    created_by: faculty,
                    active: true,
                    created_at: at(0),
                    ..Default::default()
                })
                .await
                .unwrap();
            types.push(saved.id.unwrap());
        }
        Fixture {
            storage,
            student,
            faculty,
            class,
            midterm: types[0],
            final_exam: types[1],
        }
    }

    fn entry(f: &Fixture, subject: &str, assessment_type_id: i64, date: NaiveDate) -> Marks {
        Marks {
            student_id: f.student,
            class_id: f.class,
            subject: subject.to_string(),
            assessment_type_id,
            marks_obtained: 40.0,
            max_marks: 50.0,
            assessment_date: date,
            entered_by: f.faculty,
            created_at: at(0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_latest_entry_wins() {
        let f = fixture().await;
        let marks = f.storage.marks();
        marks
            .save(entry(&f, "Maths", f.midterm, day(3, 1)))
            .await
            .unwrap();
        let mut retake = entry(&f, "Maths", f.midterm, day(4, 15));
        retake.marks_obtained = 48.0;
        let retake = marks.save(retake).await.unwrap();
        marks
            .save(entry(&f, "Maths", f.midterm, day(3, 20)))
            .await
            .unwrap();

        let latest = marks
            .find_by_student_id_and_subject_and_assessment_type_id(f.student, "Maths", f.midterm)
            .await
            .unwrap();
        assert_eq!(latest, Some(retake));
        assert!(
            marks
                .find_by_student_id_and_subject_and_assessment_type_id(
                    f.student,
                    "Maths",
                    f.final_exam
                )
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_date_range_is_inclusive_and_ascending() {
        let f = fixture().await;
        for date in [day(3, 10), day(3, 1), day(3, 31), day(4, 1)] {
            f.storage
                .marks()
                .save(entry(&f, "Physics", f.final_exam, date))
                .await
                .unwrap();
        }

        let dates: Vec<NaiveDate> = f
            .storage
            .marks()
            .find_by_student_id_and_date_between(f.student, day(3, 1), day(3, 31))
            .await
            .unwrap()
            .iter()
            .map(|m| m.assessment_date)
            .collect();
        assert_eq!(dates, vec![day(3, 1), day(3, 10), day(3, 31)]);
    }

    #[tokio::test]
    async fn test_subject_and_type_filters() {
        let f = fixture().await;
        let marks = f.storage.marks();
        marks
            .save(entry(&f, "Maths", f.midterm, day(3, 1)))
            .await
            .unwrap();
        marks
            .save(entry(&f, "Maths", f.final_exam, day(5, 1)))
            .await
            .unwrap();
        marks
            .save(entry(&f, "Physics", f.midterm, day(3, 2)))
            .await
            .unwrap();

        assert_eq!(
            marks
                .find_by_student_id_and_subject(f.student, "Maths")
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            marks
                .find_by_class_id_and_subject(f.class, "Physics")
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(marks.find_by_assessment_type_id(f.midterm).await.unwrap().len(), 2);
        assert_eq!(
            marks
                .find_by_class_id_and_subject_and_assessment_type_id(f.class, "Maths", f.final_exam)
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(marks.find_by_entered_by(f.faculty).await.unwrap().len(), 3);
        assert_eq!(marks.find_by_student_id(f.student).await.unwrap().len(), 3);
        assert!(marks.find_by_entered_by(f.student).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exists_by_assessment_type_tracks_delete() {
        let f = fixture().await;
        let marks = f.storage.marks();
        assert!(!marks.exists_by_assessment_type_id(f.midterm).await.unwrap());

        let saved = marks
            .save(entry(&f, "Maths", f.midterm, day(3, 1)))
            .await
            .unwrap();
        assert!(marks.exists_by_assessment_type_id(f.midterm).await.unwrap());
        assert!(!marks.exists_by_assessment_type_id(f.final_exam).await.unwrap());

        assert!(marks.delete_by_id(saved.id.unwrap()).await.unwrap());
        assert!(!marks.exists_by_assessment_type_id(f.midterm).await.unwrap());
        assert_eq!(saved.percentage(), Some(80.0));
    }
}
