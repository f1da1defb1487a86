#![cfg(test)]
//! Fixture builders shared by service tests.
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::*;
use crate::services::*;
use crate::wiring::Services;

pub fn services() -> Services { Services::in_memory() }

pub async fn user(s: &Services, email: &str) -> User {
    s.users
        .create(CreateUserInput { email: email.into(), names: "Test User".into(), phone: "5550100".into() })
        .await
        .expect("create user")
}

pub async fn image(s: &Services) -> Image {
    s.images
        .create(CreateImageInput {
            url: "https://img.example.com/fixture.png".into(),
            title: None,
            description: None,
            created_at: None,
            is_active: None,
        })
        .await
        .expect("create image")
}

pub async fn plan(s: &Services) -> SubscriptionPlan {
    s.plans
        .create(CreateSubscriptionPlanInput {
            name: "Basic".into(),
            tier: SubscriptionTier::Basic,
            price: Decimal::new(1999, 2),
            billing_cycle: BillingCycle::Monthly,
            status: PlanStatus::Active,
        })
        .await
        .expect("create plan")
}

pub fn restaurant_input(name: &str) -> CreateRestaurantInput {
    CreateRestaurantInput {
        name: name.into(),
        description: None,
        address: "Calle Mayor 1".into(),
        opening_hours: None,
        capacity: 50,
        image_id: None,
    }
}

pub async fn restaurant(s: &Services, name: &str) -> Restaurant {
    s.restaurants.create(restaurant_input(name)).await.expect("create restaurant")
}

pub async fn section(s: &Services, restaurant_id: Uuid) -> Section {
    s.sections
        .create(CreateSectionInput { restaurant_id, name: "Salon".into(), description: None })
        .await
        .expect("create section")
}

pub fn table_input(section_id: Uuid) -> CreateTableInput {
    CreateTableInput {
        section_id,
        table_number: 1,
        capacity: 4,
        position_x: 0,
        position_y: 0,
        width: 60,
        height: 60,
        image_id: None,
    }
}

pub async fn table(s: &Services, section_id: Uuid) -> DiningTable {
    s.tables.create(table_input(section_id)).await.expect("create table")
}

pub fn menu_input(restaurant_id: Uuid, name: &str) -> CreateMenuInput {
    CreateMenuInput { restaurant_id, name: name.into(), description: None, price: None, cover_image_url: None }
}

pub async fn menu(s: &Services, restaurant_id: Uuid, name: &str) -> Menu {
    s.menus.create(menu_input(restaurant_id, name)).await.expect("create menu")
}

/// A user plus a restaurant with one section and one table in it.
pub struct BookingFixture {
    pub user: User,
    pub restaurant: Restaurant,
    pub section: Section,
    pub table: DiningTable,
}

pub async fn booking_fixture(s: &Services) -> BookingFixture {
    let user = user(s, "guest@example.com").await;
    let restaurant = restaurant(s, "Casa").await;
    let section = section(s, restaurant.id).await;
    let table = table(s, section.id).await;
    BookingFixture { user, restaurant, section, table }
}

pub fn reservation_input(user_id: Uuid, restaurant_id: Uuid, table_id: Uuid) -> CreateReservationInput {
    CreateReservationInput {
        user_id,
        restaurant_id,
        table_id,
        reservation_date: "2024-12-24".into(),
        reservation_time: "20:30".into(),
        guest_count: 4,
        status: None,
        notes: None,
    }
}

pub async fn reservation(s: &Services, f: &BookingFixture) -> Reservation {
    s.reservations
        .create(reservation_input(f.user.id, f.restaurant.id, f.table.id))
        .await
        .expect("create reservation")
}

pub fn payment_input(reservation_id: Uuid, user_id: Uuid) -> CreatePaymentInput {
    CreatePaymentInput {
        reservation_id,
        user_id,
        amount: Decimal::new(100, 0),
        currency: "USD".into(),
        method: PaymentMethod::Card,
        status: PaymentStatus::Pending,
        paid_at: "2024-12-24T22:00:00Z".into(),
        reference: None,
        notes: None,
    }
}

#[cfg(feature = "seaorm")]
pub mod db {
    use migration::MigratorTrait;
    use models::db::{connect_with_config, DatabaseConfig};
    use sea_orm::DatabaseConnection;
    use tokio::sync::OnceCell;

    static MIGRATED: OnceCell<bool> = OnceCell::const_new();

    fn config() -> DatabaseConfig {
        let mut cfg = DatabaseConfig::from_file().unwrap_or_else(DatabaseConfig::from_env);
        cfg.max_connections = cfg.max_connections.max(5);
        cfg.min_connections = cfg.min_connections.min(1);
        cfg.connect_timeout = std::time::Duration::from_secs(3);
        cfg
    }

    /// Connection to a migrated database, or `None` when DB tests are disabled
    /// (`SKIP_DB_TESTS`) or nothing is listening.
    pub async fn get_db() -> Option<DatabaseConnection> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return None;
        }
        let migrated = *MIGRATED
            .get_or_init(|| async {
                let Ok(db) = connect_with_config(&config()).await else { return false };
                migration::Migrator::up(&db, None).await.is_ok()
            })
            .await;
        if !migrated {
            return None;
        }
        connect_with_config(&config()).await.ok()
    }
}
