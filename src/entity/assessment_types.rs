//! 考核类型实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::marks::entities::AssessmentType;
use crate::utils::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub max_marks: Option<f64>,
    pub created_by: i64,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::marks::Entity")]
    Marks,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assessment_type(self) -> AssessmentType {
        AssessmentType {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            max_marks: self.max_marks,
            created_by: self.created_by,
            active: self.is_active,
            created_at: from_millis(self.created_at),
        }
    }
}

impl From<AssessmentType> for ActiveModel {
    fn from(kind: AssessmentType) -> Self {
        ActiveModel {
            id: kind.id.map_or(NotSet, Set),
            name: Set(kind.name),
            description: Set(kind.description),
            max_marks: Set(kind.max_marks),
            created_by: Set(kind.created_by),
            is_active: Set(kind.active),
            created_at: Set(to_millis(kind.created_at)),
        }
    }
}
