//! Demo data for development environments.
//!
//! Everything goes through the entity services, so the seed is held to the same
//! reference and consistency rules as API callers.
use chrono::Duration;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use crate::dates;
use crate::domain::*;
use crate::errors::ServiceError;
use crate::services::*;
use crate::wiring::Services;

/// Rows created per entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub users: usize,
    pub subscription_plans: usize,
    pub images: usize,
    pub restaurants: usize,
    pub sections: usize,
    pub tables: usize,
    pub menus: usize,
    pub dishes: usize,
    pub reservations: usize,
    pub payments: usize,
    pub reviews: usize,
    pub subscriptions: usize,
}

const USERS: &[(&str, &str, &str)] = &[
    ("lucia.fernandez@example.com", "Lucia Fernandez", "5551000001"),
    ("mateo.rojas@example.com", "Mateo Rojas", "5551000002"),
    ("valentina.diaz@example.com", "Valentina Diaz", "5551000003"),
];

const PLANS: &[(&str, SubscriptionTier, i64, BillingCycle)] = &[
    ("Starter", SubscriptionTier::Basic, 1900, BillingCycle::Monthly),
    ("Growth", SubscriptionTier::Standard, 14900, BillingCycle::Quarterly),
    ("Enterprise", SubscriptionTier::Premium, 49900, BillingCycle::Yearly),
];

const IMAGES: &[(&str, &str)] = &[
    ("https://images.example.com/restaurants/la-terraza.jpg", "La Terraza facade"),
    ("https://images.example.com/restaurants/el-faro.jpg", "El Faro dining room"),
    ("https://images.example.com/dishes/ceviche.jpg", "Ceviche"),
    ("https://images.example.com/tables/window.jpg", "Window table"),
];

const RESTAURANTS: &[(&str, &str, &str, i32)] = &[
    ("La Terraza", "Av. Costanera 120", "Mon-Sun 12:00-23:00", 80),
    ("El Faro", "Calle del Puerto 7", "Tue-Sun 13:00-22:30", 50),
];

const SECTIONS: &[&str] = &["Main hall", "Terrace"];

const MENUS: &[(&str, &str)] = &[("Lunch", "Served 12:00 to 16:00"), ("Dinner", "Served from 19:00")];

const DISHES: &[(&str, i64)] = &[("Ceviche", 1450), ("Grilled octopus", 2200)];

/// Populate every entity with a small consistent graph and report what was created.
#[instrument(skip_all)]
pub async fn seed_demo_data(s: &Services) -> Result<SeedSummary, ServiceError> {
    let mut summary = SeedSummary::default();

    let mut users = Vec::new();
    for (email, names, phone) in USERS {
        let user = s.users
            .create(CreateUserInput { email: email.to_string(), names: names.to_string(), phone: phone.to_string() })
            .await?;
        users.push(user);
    }
    summary.users = users.len();

    let mut plans = Vec::new();
    for (name, tier, cents, cycle) in PLANS {
        let plan = s.plans
            .create(CreateSubscriptionPlanInput {
                name: name.to_string(),
                tier: *tier,
                price: Decimal::new(*cents, 2),
                billing_cycle: *cycle,
                status: PlanStatus::Active,
            })
            .await?;
        plans.push(plan);
    }
    summary.subscription_plans = plans.len();

    let mut images = Vec::new();
    for (url, title) in IMAGES {
        let image = s.images
            .create(CreateImageInput {
                url: url.to_string(),
                title: Some(title.to_string()),
                description: None,
                created_at: None,
                is_active: None,
            })
            .await?;
        images.push(image);
    }
    summary.images = images.len();

    let today = dates::now();
    for (idx, (name, address, hours, capacity)) in RESTAURANTS.iter().enumerate() {
        let restaurant = s.restaurants
            .create(CreateRestaurantInput {
                name: name.to_string(),
                description: None,
                address: address.to_string(),
                opening_hours: Some(hours.to_string()),
                capacity: *capacity,
                image_id: images.get(idx).map(|i| i.id),
            })
            .await?;
        summary.restaurants += 1;

        let mut tables = Vec::new();
        for (sidx, section_name) in SECTIONS.iter().enumerate() {
            let section = s.sections
                .create(CreateSectionInput {
                    restaurant_id: restaurant.id,
                    name: section_name.to_string(),
                    description: None,
                })
                .await?;
            summary.sections += 1;

            for n in 0..2 {
                let number = (sidx * 10 + n + 1) as i32;
                let table = s.tables
                    .create(CreateTableInput {
                        section_id: section.id,
                        table_number: number,
                        capacity: 4,
                        position_x: 40 + 80 * n as i32,
                        position_y: 40 + 100 * sidx as i32,
                        width: 60,
                        height: 60,
                        image_id: if n == 0 { images.get(3).map(|i| i.id) } else { None },
                    })
                    .await?;
                tables.push(table);
            }
        }
        summary.tables += tables.len();

        for (menu_name, menu_desc) in MENUS {
            let menu = s.menus
                .create(CreateMenuInput {
                    restaurant_id: restaurant.id,
                    name: menu_name.to_string(),
                    description: Some(menu_desc.to_string()),
                    price: None,
                    cover_image_url: None,
                })
                .await?;
            summary.menus += 1;

            for (dish_name, cents) in DISHES {
                s.dishes
                    .create(CreateDishInput {
                        restaurant_id: restaurant.id,
                        menu_id: menu.id,
                        name: dish_name.to_string(),
                        description: None,
                        price: Decimal::new(*cents, 2),
                        image_id: images.get(2).map(|i| i.id),
                    })
                    .await?;
                summary.dishes += 1;
            }
        }

        for (uidx, user) in users.iter().enumerate() {
            let Some(table) = tables.get(uidx % tables.len().max(1)) else { continue };
            let reservation = s.reservations
                .create(CreateReservationInput {
                    user_id: user.id,
                    restaurant_id: restaurant.id,
                    table_id: table.id,
                    reservation_date: (today + Duration::days(uidx as i64 + 1)).into(),
                    reservation_time: "20:00".to_string(),
                    guest_count: 2,
                    status: None,
                    notes: None,
                })
                .await?;
            summary.reservations += 1;

            s.payments
                .create(CreatePaymentInput {
                    reservation_id: reservation.id,
                    user_id: user.id,
                    amount: Decimal::new(4500, 2),
                    currency: "USD".to_string(),
                    method: PaymentMethod::Card,
                    status: PaymentStatus::Pending,
                    paid_at: today.into(),
                    reference: None,
                    notes: None,
                })
                .await?;
            summary.payments += 1;

            s.reviews
                .create(CreateReviewInput {
                    user_id: user.id,
                    restaurant_id: restaurant.id,
                    rating: 5 - (uidx as i32 % 3),
                    comment: Some("Great service.".to_string()),
                    created_at: None,
                })
                .await?;
            summary.reviews += 1;
        }

        if let (Some(owner), Some(plan)) = (users.get(idx), plans.get(idx)) {
            s.subscriptions
                .create(CreateSubscriptionInput {
                    user_id: owner.id,
                    restaurant_id: restaurant.id,
                    plan_id: plan.id,
                    starts_on: today.into(),
                    ends_on: None,
                    status: None,
                })
                .await?;
            summary.subscriptions += 1;
        }
    }

    info!(?summary, "seed_completed");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pagination;

    #[tokio::test]
    async fn seeds_a_consistent_graph() {
        let s = Services::in_memory();
        let summary = seed_demo_data(&s).await.unwrap();
        assert_eq!(summary.users, 3);
        assert_eq!(summary.restaurants, 2);
        assert_eq!(summary.tables, 8);
        assert_eq!(summary.dishes, 8);
        assert_eq!(summary.payments, summary.reservations);

        let all = Pagination::new(0, 100);
        assert_eq!(s.dishes.list(all).await.unwrap().len(), summary.dishes);
        for d in s.dishes.list(all).await.unwrap() {
            assert_eq!(d.menu.restaurant.id, d.restaurant.id);
        }
        for v in s.reservations.list(all).await.unwrap() {
            assert_eq!(v.table.restaurant().id, v.restaurant.id);
        }
        for p in s.payments.list(all).await.unwrap() {
            assert_eq!(p.reservation.user.id, p.user.id);
        }
    }

    #[test]
    fn summary_uses_camel_case() {
        let v = serde_json::to_value(SeedSummary::default()).unwrap();
        assert!(v.get("subscriptionPlans").is_some());
    }
}
