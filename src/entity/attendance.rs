//! 考勤实体

use chrono::NaiveDate;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::attendance::entities::Attendance;
use crate::utils::{from_millis, parse_stored, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub faculty_id: i64,
    pub subject: Option<String>,
    pub attendance_date: NaiveDate,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    pub marked_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::FacultyId",
        to = "super::users::Column::Id"
    )]
    Faculty,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attendance(self) -> Attendance {
        Attendance {
            id: Some(self.id),
            student_id: self.student_id,
            class_id: self.class_id,
            faculty_id: self.faculty_id,
            subject: self.subject,
            date: self.attendance_date,
            status: parse_stored(&self.status, "attendance.status"),
            remarks: self.remarks,
            marked_at: from_millis(self.marked_at),
        }
    }
}

impl From<Attendance> for ActiveModel {
    fn from(record: Attendance) -> Self {
        ActiveModel {
            id: record.id.map_or(NotSet, Set),
            student_id: Set(record.student_id),
            class_id: Set(record.class_id),
            faculty_id: Set(record.faculty_id),
            subject: Set(record.subject),
            attendance_date: Set(record.date),
            status: Set(record.status.to_string()),
            remarks: Set(record.remarks),
            marked_at: Set(to_millis(record.marked_at)),
        }
    }
}
