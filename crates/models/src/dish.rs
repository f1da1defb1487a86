use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{image, menu, restaurant};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dish")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub menu_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    pub image_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Restaurant,
    Menu,
    Image,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity).from(Column::RestaurantId).to(restaurant::Column::Id).into(),
            Relation::Menu => Entity::belongs_to(menu::Entity).from(Column::MenuId).to(menu::Column::Id).into(),
            Relation::Image => Entity::belongs_to(image::Entity).from(Column::ImageId).to(image::Column::Id).into(),
        }
    }
}

impl Related<menu::Entity> for Entity {
    fn to() -> RelationDef { Relation::Menu.def() }
}

impl ActiveModelBehavior for ActiveModel {}
