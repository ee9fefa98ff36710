//! 直播课实体

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::live_classes::entities::LiveClass;
use crate::utils::{from_millis, parse_stored, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "live_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub meeting_url: String,
    pub scheduled_at: i64,
    pub duration_minutes: i32,
    pub status: String,
    pub created_at: i64,
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
    pub fn into_live_class(self) -> LiveClass {
        LiveClass {
            id: Some(self.id),
            title: self.title,
            description: self.description,
            faculty_id: self.faculty_id,
            class_id: self.class_id,
            subject: self.subject,
            meeting_url: self.meeting_url,
            scheduled_at: from_millis(self.scheduled_at),
            duration_minutes: self.duration_minutes,
            status: parse_stored(&self.status, "live_classes.status"),
            created_at: from_millis(self.created_at),
        }
    }
}

impl From<LiveClass> for ActiveModel {
    fn from(live: LiveClass) -> Self {
        ActiveModel {
            id: live.id.map_or(NotSet, Set),
            title: Set(live.title),
            description: Set(live.description),
            faculty_id: Set(live.faculty_id),
            class_id: Set(live.class_id),
            subject: Set(live.subject),
            meeting_url: Set(live.meeting_url),
            scheduled_at: Set(to_millis(live.scheduled_at)),
            duration_minutes: Set(live.duration_minutes),
            status: Set(live.status.to_string()),
            created_at: Set(to_millis(live.created_at)),
        }
    }
}
