//! 学习资源实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::resources::entities::Resource;
use crate::utils::{from_millis, parse_stored, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub subject: String,
    pub resource_type: String,
    pub url: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub class_id: Option<i64>,
    pub uploaded_by: i64,
    pub is_public: bool,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedBy",
        to = "super::users::Column::Id"
    )]
    Uploader,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_resource(self) -> Resource {
        Resource {
            id: Some(self.id),
            title: self.title,
            description: self.description,
            subject: self.subject,
            resource_type: parse_stored(&self.resource_type, "resources.resource_type"),
            url: self.url,
            file_name: self.file_name,
            file_size: self.file_size,
            class_id: self.class_id,
            uploaded_by: self.uploaded_by,
            public: self.is_public,
            uploaded_at: from_millis(self.uploaded_at),
        }
    }
}

impl From<Resource> for ActiveModel {
    fn from(resource: Resource) -> Self {
        ActiveModel {
            id: resource.id.map_or(NotSet, Set),
            title: Set(resource.title),
            description: Set(resource.description),
            subject: Set(resource.subject),
            resource_type: Set(resource.resource_type.to_string()),
            url: Set(resource.url),
            file_name: Set(resource.file_name),
            file_size: Set(resource.file_size),
            class_id: Set(resource.class_id),
            uploaded_by: Set(resource.uploaded_by),
            is_public: Set(resource.public),
            uploaded_at: Set(to_millis(resource.uploaded_at)),
        }
    }
}
