use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::restaurant;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub price: Option<Decimal>,
    pub cover_image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Restaurant,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity).from(Column::RestaurantId).to(restaurant::Column::Id).into(),
        }
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Restaurant.def() }
}

impl ActiveModelBehavior for ActiveModel {}
