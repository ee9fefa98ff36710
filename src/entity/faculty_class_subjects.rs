//! 教师-班级-科目分配实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::faculty_class_subjects::entities::FacultyClassSubject;
use crate::utils::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty_class_subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub is_active: bool,
    pub assigned_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> FacultyClassSubject {
        FacultyClassSubject {
            id: Some(self.id),
            faculty_id: self.faculty_id,
            class_id: self.class_id,
            subject: self.subject,
            active: self.is_active,
            assigned_at: from_millis(self.assigned_at),
        }
    }
}

impl From<FacultyClassSubject> for ActiveModel {
    fn from(assignment: FacultyClassSubject) -> Self {
        ActiveModel {
            id: assignment.id.map_or(NotSet, Set),
            faculty_id: Set(assignment.faculty_id),
            class_id: Set(assignment.class_id),
            subject: Set(assignment.subject),
            is_active: Set(assignment.active),
            assigned_at: Set(to_millis(assignment.assigned_at)),
        }
    }
}
