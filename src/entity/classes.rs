//! 班级实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::classes::entities::Class;
use crate::utils::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub year: i32,
    pub division: String,
    pub department: String,
    pub academic_year: String,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
    #[sea_orm(has_many = "super::faculty_class_subjects::Entity")]
    FacultyClassSubjects,
    #[sea_orm(has_many = "super::live_classes::Entity")]
    LiveClasses,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::faculty_class_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FacultyClassSubjects.def()
    }
}

impl Related<super::live_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LiveClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> Class {
        Class {
            id: Some(self.id),
            name: self.name,
            year: self.year,
            division: self.division,
            department: self.department,
            academic_year: self.academic_year,
            active: self.is_active,
            created_at: from_millis(self.created_at),
        }
    }
}

impl From<Class> for ActiveModel {
    fn from(class: Class) -> Self {
        ActiveModel {
            id: class.id.map_or(NotSet, Set),
            name: Set(class.name),
            year: Set(class.year),
            division: Set(class.division),
            department: Set(class.department),
            academic_year: Set(class.academic_year),
            is_active: Set(class.active),
            created_at: Set(to_millis(class.created_at)),
        }
    }
}
