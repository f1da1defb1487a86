use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::SubscriptionStatus;
use crate::{restaurant, subscription_plan, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscription")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub plan_id: Uuid,
    pub starts_on: DateTimeWithTimeZone,
    pub ends_on: Option<DateTimeWithTimeZone>,
    pub status: SubscriptionStatus,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Restaurant,
    Plan,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity).from(Column::RestaurantId).to(restaurant::Column::Id).into(),
            Relation::Plan => Entity::belongs_to(subscription_plan::Entity).from(Column::PlanId).to(subscription_plan::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
