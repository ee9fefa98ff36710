//! 教师-班级-科目分配存储操作

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::classes::Entity as Classes;
use crate::entity::faculty_class_subjects::{Column, Entity as FacultyClassSubjects};
use crate::errors::{Result, TrackerError};
use crate::models::faculty_class_subjects::{
    entities::FacultyClassSubject, responses::FacultyClassSubjectDetail,
};
use crate::storage::FacultyClassSubjectRepository;

sea_orm_repository!(
    FacultyClassSubjectStore,
    faculty_class_subjects,
    FacultyClassSubject,
    into_assignment,
    "科目分配"
);

#[async_trait]
impl FacultyClassSubjectRepository for FacultyClassSubjectStore {
    async fn find_by_faculty_id(&self, faculty_id: i64) -> Result<Vec<FacultyClassSubject>> {
        self.fetch_all(
            FacultyClassSubjects::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<FacultyClassSubject>> {
        self.fetch_all(
            FacultyClassSubjects::find()
                .filter(Column::ClassId.eq(class_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_faculty_id_and_active(
        &self,
        faculty_id: i64,
        active: bool,
    ) -> Result<Vec<FacultyClassSubject>> {
        self.fetch_all(
            FacultyClassSubjects::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_active(
        &self,
        class_id: i64,
        active: bool,
    ) -> Result<Vec<FacultyClassSubject>> {
        self.fetch_all(
            FacultyClassSubjects::find()
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_faculty_id_and_class_id(
        &self,
        faculty_id: i64,
        class_id: i64,
    ) -> Result<Vec<FacultyClassSubject>> {
        self.fetch_all(
            FacultyClassSubjects::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .filter(Column::ClassId.eq(class_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_faculty_id_and_class_id_and_active(
        &self,
        faculty_id: i64,
        class_id: i64,
        active: bool,
    ) -> Result<Vec<FacultyClassSubject>> {
        self.fetch_all(
            FacultyClassSubjects::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_faculty_id_and_class_id_and_subject(
        &self,
        faculty_id: i64,
        class_id: i64,
        subject: &str,
    ) -> Result<Option<FacultyClassSubject>> {
        self.fetch_one(
            FacultyClassSubjects::find()
                .filter(Column::FacultyId.eq(faculty_id))
                .filter(Column::ClassId.eq(class_id))
                .filter(Column::Subject.eq(subject)),
        )
        .await
    }

    async fn exists_by_faculty_id_and_class_id_and_subject(
        &self,
        faculty_id: i64,
        class_id: i64,
        subject: &str,
    ) -> Result<bool> {
        let count = self
            .fetch_count(
                FacultyClassSubjects::find()
                    .filter(Column::FacultyId.eq(faculty_id))
                    .filter(Column::ClassId.eq(class_id))
                    .filter(Column::Subject.eq(subject)),
            )
            .await?;
        Ok(count > 0)
    }

    async fn find_by_faculty_id_with_class(
        &self,
        faculty_id: i64,
    ) -> Result<Vec<FacultyClassSubjectDetail>> {
        let rows = FacultyClassSubjects::find()
            .filter(Column::FacultyId.eq(faculty_id))
            .find_also_related(Classes)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("查询科目分配及班级失败", e))?;

        rows.into_iter()
            .map(|(assignment, class)| -> Result<FacultyClassSubjectDetail> {
                let class = class.ok_or_else(|| {
                    TrackerError::missing_association(format!(
                        "科目分配 {} 引用的班级 {} 不存在",
                        assignment.id, assignment.class_id
                    ))
                })?;
                Ok(FacultyClassSubjectDetail {
                    assignment: assignment.into_assignment(),
                    class: class.into_class(),
                })
            })
            .collect()
    }
}
