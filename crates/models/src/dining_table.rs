//! `dining_table` rows. Named to stay clear of the SQL keyword.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{image, section};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dining_table")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub section_id: Uuid,
    pub table_number: i32,
    pub capacity: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    pub image_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Section,
    Image,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Section => Entity::belongs_to(section::Entity).from(Column::SectionId).to(section::Column::Id).into(),
            Relation::Image => Entity::belongs_to(image::Entity).from(Column::ImageId).to(image::Column::Id).into(),
        }
    }
}

impl Related<section::Entity> for Entity {
    fn to() -> RelationDef { Relation::Section.def() }
}

impl ActiveModelBehavior for ActiveModel {}
