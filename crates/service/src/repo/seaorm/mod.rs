//! SeaORM-backed repositories over the Postgres schema in `migration`.
//!
//! Lists are ordered by primary key so offset/limit windows are stable.
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use models::{
    dining_table, dish, image, layout_object, menu, payment, reservation, restaurant, review, section, subscription,
    subscription_plan, user,
};

use crate::domain::*;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;
use crate::repository::Repository;

mod load;

macro_rules! seaorm_repository {
    ($(#[$doc:meta])* $repo:ident, $domain:ty, $module:ident, $from:path, $active:path) => {
        $(#[$doc])*
        pub struct $repo {
            pub db: DatabaseConnection,
        }

        impl $repo {
            pub fn new(db: DatabaseConnection) -> Self { Self { db } }
        }

        #[async_trait]
        impl Repository<$domain> for $repo {
            async fn find_by_id(&self, id: Uuid) -> Result<Option<$domain>, ServiceError> {
                match $module::Entity::find_by_id(id).one(&self.db).await? {
                    Some(m) => Ok(Some($from(&self.db, m).await?)),
                    None => Ok(None),
                }
            }

            async fn find_all(&self, page: PageRequest) -> Result<Vec<$domain>, ServiceError> {
                let rows = $module::Entity::find()
                    .order_by_asc($module::Column::Id)
                    .offset(page.offset)
                    .limit(page.limit)
                    .all(&self.db)
                    .await?;
                let mut out = Vec::with_capacity(rows.len());
                for m in rows {
                    out.push($from(&self.db, m).await?);
                }
                Ok(out)
            }

            async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
                let n = $module::Entity::find_by_id(id).count(&self.db).await?;
                Ok(n > 0)
            }

            async fn create(&self, entity: $domain) -> Result<$domain, ServiceError> {
                $active(&entity).insert(&self.db).await?;
                Ok(entity)
            }

            async fn update(&self, entity: $domain) -> Result<$domain, ServiceError> {
                $active(&entity).update(&self.db).await?;
                Ok(entity)
            }

            async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
                $module::Entity::delete_by_id(id).exec(&self.db).await?;
                Ok(())
            }
        }
    };
}

seaorm_repository!(SeaOrmUserRepository, User, user, load::user_from, load::user_active);
seaorm_repository!(SeaOrmImageRepository, Image, image, load::image_from, load::image_active);
seaorm_repository!(SeaOrmRestaurantRepository, Restaurant, restaurant, load::restaurant_from, load::restaurant_active);
seaorm_repository!(SeaOrmSectionRepository, Section, section, load::section_from, load::section_active);
seaorm_repository!(
    /// Tables load their section and, through it, the owning restaurant.
    SeaOrmTableRepository, DiningTable, dining_table, load::table_from, load::table_active
);
seaorm_repository!(SeaOrmMenuRepository, Menu, menu, load::menu_from, load::menu_active);
seaorm_repository!(SeaOrmDishRepository, Dish, dish, load::dish_from, load::dish_active);
seaorm_repository!(SeaOrmReservationRepository, Reservation, reservation, load::reservation_from, load::reservation_active);
seaorm_repository!(SeaOrmPaymentRepository, Payment, payment, load::payment_from, load::payment_active);
seaorm_repository!(SeaOrmReviewRepository, Review, review, load::review_from, load::review_active);
seaorm_repository!(SeaOrmSubscriptionPlanRepository, SubscriptionPlan, subscription_plan, load::plan_from, load::plan_active);
seaorm_repository!(SeaOrmSubscriptionRepository, Subscription, subscription, load::subscription_from, load::subscription_active);
seaorm_repository!(
    /// Writes touch only the object row; section placement is read back from the join table.
    SeaOrmLayoutObjectRepository, LayoutObject, layout_object, load::layout_object_from, load::layout_object_active
);
