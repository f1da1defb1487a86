use sea_orm::{ActiveEnum, ActiveModelTrait, EntityTrait, Iterable, Set};
use migration::MigratorTrait;
use uuid::Uuid;

use crate::enums::{PaymentMethod, PaymentStatus, ReservationStatus, SubscriptionStatus};
use crate::{db, restaurant, section, user};

#[test]
fn enum_string_values_match_wire_names() {
    for method in PaymentMethod::iter() {
        let wire = serde_json::to_value(method).unwrap();
        assert_eq!(wire.as_str(), Some(method.to_value().as_str()));
    }
    assert_eq!(PaymentStatus::Refunded.to_value(), "REFUNDED");
    assert_eq!(ReservationStatus::default(), ReservationStatus::Pending);
    assert_eq!(SubscriptionStatus::default(), SubscriptionStatus::Active);
}

#[test]
fn unknown_enum_value_is_rejected() {
    let parsed: Result<PaymentMethod, _> = serde_json::from_str("\"BITCOIN\"");
    assert!(parsed.is_err());
}

#[tokio::test]
async fn restaurant_section_rows_roundtrip() {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return;
    }
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return;
    }

    let r = restaurant::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Row Test".into()),
        description: Set(None),
        address: Set("1 Test St".into()),
        opening_hours: Set(Some("9-17".into())),
        capacity: Set(20),
        image_id: Set(None),
    }
    .insert(&db)
    .await
    .expect("insert restaurant");

    let s = section::ActiveModel {
        id: Set(Uuid::new_v4()),
        restaurant_id: Set(r.id),
        name: Set("Patio".into()),
        description: Set(None),
    }
    .insert(&db)
    .await
    .expect("insert section");

    let found = section::Entity::find_by_id(s.id).one(&db).await.expect("find").expect("row");
    assert_eq!(found.restaurant_id, r.id);

    let u = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(format!("{}@example.com", Uuid::new_v4())),
        names: Set("Row Tester".into()),
        phone: Set("555".into()),
    }
    .insert(&db)
    .await
    .expect("insert user");

    section::Entity::delete_by_id(s.id).exec(&db).await.expect("delete section");
    restaurant::Entity::delete_by_id(r.id).exec(&db).await.expect("delete restaurant");
    user::Entity::delete_by_id(u.id).exec(&db).await.expect("delete user");
}
