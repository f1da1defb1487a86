use service::services::*;
use service::SeedSummary;
use utoipa::OpenApi;

use crate::errors::ErrorBody;
use crate::routes::{self, *};

#[derive(OpenApi)]
#[openapi(
    info(title = "Restaurant Platform API"),
    paths(
        routes::root,
        routes::health,
        routes::seed,
        users::list, users::fetch, users::create, users::update, users::remove,
        images::list, images::fetch, images::create, images::update, images::remove,
        subscription_plans::list, subscription_plans::fetch, subscription_plans::create,
        subscription_plans::update, subscription_plans::remove,
        restaurants::list, restaurants::fetch, restaurants::create, restaurants::update, restaurants::remove,
        sections::list, sections::fetch, sections::create, sections::update, sections::remove,
        tables::list, tables::fetch, tables::create, tables::update, tables::remove,
        menus::list, menus::fetch, menus::create, menus::update, menus::remove,
        dishes::list, dishes::fetch, dishes::create, dishes::update, dishes::remove,
        reservations::list, reservations::fetch, reservations::create, reservations::update, reservations::remove,
        payments::list, payments::fetch, payments::create, payments::update, payments::remove,
        reviews::list, reviews::fetch, reviews::create, reviews::update, reviews::remove,
        subscriptions::list, subscriptions::fetch, subscriptions::create, subscriptions::update, subscriptions::remove,
        layout_objects::list, layout_objects::fetch, layout_objects::create, layout_objects::update,
        layout_objects::remove,
    ),
    components(schemas(
        ErrorBody,
        SeedSummary,
        routes::SeedResponse,
        users::UserResponse, CreateUserInput, UpdateUserInput,
        images::ImageResponse, CreateImageInput, UpdateImageInput,
        subscription_plans::SubscriptionPlanResponse, CreateSubscriptionPlanInput, UpdateSubscriptionPlanInput,
        restaurants::RestaurantResponse, CreateRestaurantInput, UpdateRestaurantInput,
        sections::SectionResponse, CreateSectionInput, UpdateSectionInput,
        tables::TableResponse, CreateTableInput, UpdateTableInput,
        menus::MenuResponse, CreateMenuInput, UpdateMenuInput,
        dishes::DishResponse, CreateDishInput, UpdateDishInput,
        reservations::ReservationResponse, CreateReservationInput, UpdateReservationInput,
        payments::PaymentResponse, CreatePaymentInput, UpdatePaymentInput,
        reviews::ReviewResponse, CreateReviewInput, UpdateReviewInput,
        subscriptions::SubscriptionResponse, CreateSubscriptionInput, UpdateSubscriptionInput,
        layout_objects::LayoutObjectResponse, CreateLayoutObjectInput, UpdateLayoutObjectInput,
        models::enums::PaymentMethod,
        models::enums::PaymentStatus,
        models::enums::ReservationStatus,
        models::enums::SubscriptionStatus,
        models::enums::SubscriptionTier,
        models::enums::BillingCycle,
        models::enums::PlanStatus,
    )),
    tags(
        (name = "health"),
        (name = "seed", description = "Demo data for development environments"),
        (name = "users"), (name = "images"), (name = "subscription-plans"), (name = "restaurants"),
        (name = "sections"), (name = "tables"), (name = "menus"), (name = "dishes"),
        (name = "reservations"), (name = "payments"), (name = "reviews"), (name = "subscriptions"),
        (name = "layout-objects"),
    )
)]
pub struct ApiDoc;
