//! Resolved domain objects.
//!
//! References to other entities are held as the full, already-resolved object so
//! consistency checks can walk them (dish → menu → restaurant, reservation → table
//! → section → restaurant, payment → reservation → user).
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub use models::enums::{
    BillingCycle, PaymentMethod, PaymentStatus, PlanStatus, ReservationStatus, SubscriptionStatus, SubscriptionTier,
};

use crate::repository::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub names: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: Uuid,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub opening_hours: Option<String>,
    pub capacity: i32,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: Uuid,
    pub restaurant: Restaurant,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiningTable {
    pub id: Uuid,
    pub section: Section,
    pub table_number: i32,
    pub capacity: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    pub image: Option<Image>,
}

impl DiningTable {
    /// A table belongs to whatever restaurant owns its section.
    pub fn restaurant(&self) -> &Restaurant { &self.section.restaurant }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: Uuid,
    pub restaurant: Restaurant,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: Uuid,
    pub restaurant: Restaurant,
    pub menu: Menu,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub user: User,
    pub restaurant: Restaurant,
    pub table: DiningTable,
    pub reservation_date: DateTime<Utc>,
    pub reservation_time: String,
    pub guest_count: i32,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub reservation: Reservation,
    pub user: User,
    pub amount: Decimal,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub user: User,
    pub restaurant: Restaurant,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlan {
    pub id: Uuid,
    pub name: String,
    pub tier: SubscriptionTier,
    pub price: Decimal,
    pub billing_cycle: BillingCycle,
    pub status: PlanStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub user: User,
    pub restaurant: Restaurant,
    pub plan: SubscriptionPlan,
    pub starts_on: DateTime<Utc>,
    /// `None` is an open-ended subscription.
    pub ends_on: Option<DateTime<Utc>>,
    pub status: SubscriptionStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutObject {
    pub id: Uuid,
    pub name: Option<String>,
    pub object_type: Option<String>,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    pub image: Option<Image>,
    /// Sections this object is placed in; maintained by storage, read-only here.
    pub section_ids: Vec<Uuid>,
}

macro_rules! entity_names {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Entity for $ty {
                const NAME: &'static str = $name;
                fn id(&self) -> Uuid { self.id }
            }
        )*
    };
}

entity_names! {
    User => "User",
    Image => "Image",
    Restaurant => "Restaurant",
    Section => "Section",
    DiningTable => "Table",
    Menu => "Menu",
    Dish => "Dish",
    Reservation => "Reservation",
    Payment => "Payment",
    Review => "Review",
    SubscriptionPlan => "Subscription plan",
    Subscription => "Subscription",
    LayoutObject => "Layout object",
}
