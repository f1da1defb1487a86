use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::image;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub opening_hours: Option<String>,
    pub capacity: i32,
    pub image_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Image,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Image => Entity::belongs_to(image::Entity).from(Column::ImageId).to(image::Column::Id).into(),
        }
    }
}

impl Related<image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Image.def() }
}

impl ActiveModelBehavior for ActiveModel {}
