use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index name, table, column) for every FK column that list/lookups filter on.
const INDEXES: &[(&str, &str, &str)] = &[
    ("idx_section_restaurant", "section", "restaurant_id"),
    ("idx_dining_table_section", "dining_table", "section_id"),
    ("idx_menu_restaurant", "menu", "restaurant_id"),
    ("idx_dish_menu", "dish", "menu_id"),
    ("idx_dish_restaurant", "dish", "restaurant_id"),
    ("idx_reservation_restaurant", "reservation", "restaurant_id"),
    ("idx_reservation_user", "reservation", "user_id"),
    ("idx_reservation_table", "reservation", "table_id"),
    ("idx_payment_reservation", "payment", "reservation_id"),
    ("idx_review_restaurant", "review", "restaurant_id"),
    ("idx_subscription_user", "subscription", "user_id"),
    ("idx_subscription_restaurant", "subscription", "restaurant_id"),
    ("idx_section_layout_object_object", "section_layout_object", "layout_object_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
