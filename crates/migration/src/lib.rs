//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user;
mod m20250101_000002_create_image;
mod m20250101_000003_create_subscription_plan;
mod m20250101_000004_create_restaurant;
mod m20250101_000005_create_section;
mod m20250101_000006_create_dining_table;
mod m20250101_000007_create_menu;
mod m20250101_000008_create_dish;
mod m20250101_000009_create_reservation;
mod m20250101_000010_create_payment;
mod m20250101_000011_create_review;
mod m20250101_000012_create_subscription;
mod m20250101_000013_create_layout_object;
mod m20250101_000099_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user::Migration),
            Box::new(m20250101_000002_create_image::Migration),
            Box::new(m20250101_000003_create_subscription_plan::Migration),
            Box::new(m20250101_000004_create_restaurant::Migration),
            Box::new(m20250101_000005_create_section::Migration),
            Box::new(m20250101_000006_create_dining_table::Migration),
            Box::new(m20250101_000007_create_menu::Migration),
            Box::new(m20250101_000008_create_dish::Migration),
            Box::new(m20250101_000009_create_reservation::Migration),
            Box::new(m20250101_000010_create_payment::Migration),
            Box::new(m20250101_000011_create_review::Migration),
            Box::new(m20250101_000012_create_subscription::Migration),
            Box::new(m20250101_000013_create_layout_object::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000099_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_unique_and_indexes_come_last() {
        let names: Vec<String> = Migrator::migrations().iter().map(|m| m.name().to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
        assert_eq!(names, sorted, "migrations must be registered in name order");
        assert!(names.last().map(|n| n.ends_with("add_indexes")).unwrap_or(false));
    }
}
