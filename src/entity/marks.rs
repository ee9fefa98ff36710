//! 成绩实体

use chrono::NaiveDate;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::marks::entities::Marks;
use crate::utils::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub assessment_type_id: i64,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub assessment_date: NaiveDate,
    pub entered_by: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    pub created_at: i64,
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
        from = "Column::EnteredBy",
        to = "super::users::Column::Id"
    )]
    EnteredBy,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::assessment_types::Entity",
        from = "Column::AssessmentTypeId",
        to = "super::assessment_types::Column::Id"
    )]
    AssessmentType,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::assessment_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssessmentType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_marks(self) -> Marks {
        Marks {
            id: Some(self.id),
            student_id: self.student_id,
            class_id: self.class_id,
            subject: self.subject,
            assessment_type_id: self.assessment_type_id,
            marks_obtained: self.marks_obtained,
            max_marks: self.max_marks,
            assessment_date: self.assessment_date,
            entered_by: self.entered_by,
            remarks: self.remarks,
            created_at: from_millis(self.created_at),
        }
    }
}

impl From<Marks> for ActiveModel {
    fn from(marks: Marks) -> Self {
        ActiveModel {
            id: marks.id.map_or(NotSet, Set),
            student_id: Set(marks.student_id),
            class_id: Set(marks.class_id),
            subject: Set(marks.subject),
            assessment_type_id: Set(marks.assessment_type_id),
            marks_obtained: Set(marks.marks_obtained),
            max_marks: Set(marks.max_marks),
            assessment_date: Set(marks.assessment_date),
            entered_by: Set(marks.entered_by),
            remarks: Set(marks.remarks),
            created_at: Set(to_millis(marks.created_at)),
        }
    }
}
