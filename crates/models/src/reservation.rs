use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::ReservationStatus;
use crate::{dining_table, restaurant, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTimeWithTimeZone,
    /// `HH:mm`
    pub reservation_time: String,
    pub guest_count: i32,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Restaurant,
    Table,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity).from(Column::RestaurantId).to(restaurant::Column::Id).into(),
            Relation::Table => Entity::belongs_to(dining_table::Entity).from(Column::TableId).to(dining_table::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
