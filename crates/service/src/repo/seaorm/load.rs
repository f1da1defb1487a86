//! Row ⇄ domain conversion. Loaders follow foreign keys as deep as the
//! consistency rules need.
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use models::{
    dining_table, dish, image, layout_object, menu, payment, reservation, restaurant, review, section,
    section_layout_object, subscription, subscription_plan, user,
};

use crate::domain::*;
use crate::errors::ServiceError;

fn dangling(entity: &str, id: Uuid) -> ServiceError {
    ServiceError::Repository(format!("dangling {} reference {}", entity, id))
}

pub(crate) async fn user_by_id(db: &DatabaseConnection, id: Uuid) -> Result<User, ServiceError> {
    let m = user::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("user", id))?;
    user_from(db, m).await
}

pub(crate) async fn user_from(_db: &DatabaseConnection, m: user::Model) -> Result<User, ServiceError> {
    Ok(User { id: m.id, email: m.email, names: m.names, phone: m.phone })
}

pub(crate) fn user_active(u: &User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(u.id),
        email: Set(u.email.clone()),
        names: Set(u.names.clone()),
        phone: Set(u.phone.clone()),
    }
}

pub(crate) async fn image_ref(db: &DatabaseConnection, id: Option<Uuid>) -> Result<Option<Image>, ServiceError> {
    match id {
        Some(id) => {
            let m = image::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("image", id))?;
            Ok(Some(image_from(db, m).await?))
        }
        None => Ok(None),
    }
}

pub(crate) async fn image_from(_db: &DatabaseConnection, m: image::Model) -> Result<Image, ServiceError> {
    Ok(Image {
        id: m.id,
        url: m.url,
        title: m.title,
        description: m.description,
        created_at: m.created_at.with_timezone(&Utc),
        is_active: m.is_active,
    })
}

pub(crate) fn image_active(i: &Image) -> image::ActiveModel {
    image::ActiveModel {
        id: Set(i.id),
        url: Set(i.url.clone()),
        title: Set(i.title.clone()),
        description: Set(i.description.clone()),
        created_at: Set(i.created_at.into()),
        is_active: Set(i.is_active),
    }
}

pub(crate) async fn restaurant_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Restaurant, ServiceError> {
    let m = restaurant::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("restaurant", id))?;
    restaurant_from(db, m).await
}

pub(crate) async fn restaurant_from(db: &DatabaseConnection, m: restaurant::Model) -> Result<Restaurant, ServiceError> {
    let image = image_ref(db, m.image_id).await?;
    Ok(Restaurant {
        id: m.id,
        name: m.name,
        description: m.description,
        address: m.address,
        opening_hours: m.opening_hours,
        capacity: m.capacity,
        image,
    })
}

pub(crate) fn restaurant_active(r: &Restaurant) -> restaurant::ActiveModel {
    restaurant::ActiveModel {
        id: Set(r.id),
        name: Set(r.name.clone()),
        description: Set(r.description.clone()),
        address: Set(r.address.clone()),
        opening_hours: Set(r.opening_hours.clone()),
        capacity: Set(r.capacity),
        image_id: Set(r.image.as_ref().map(|i| i.id)),
    }
}

pub(crate) async fn section_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Section, ServiceError> {
    let m = section::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("section", id))?;
    section_from(db, m).await
}

pub(crate) async fn section_from(db: &DatabaseConnection, m: section::Model) -> Result<Section, ServiceError> {
    let restaurant = restaurant_by_id(db, m.restaurant_id).await?;
    Ok(Section { id: m.id, restaurant, name: m.name, description: m.description })
}

pub(crate) fn section_active(s: &Section) -> section::ActiveModel {
    section::ActiveModel {
        id: Set(s.id),
        restaurant_id: Set(s.restaurant.id),
        name: Set(s.name.clone()),
        description: Set(s.description.clone()),
    }
}

pub(crate) async fn table_by_id(db: &DatabaseConnection, id: Uuid) -> Result<DiningTable, ServiceError> {
    let m = dining_table::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("table", id))?;
    table_from(db, m).await
}

pub(crate) async fn table_from(db: &DatabaseConnection, m: dining_table::Model) -> Result<DiningTable, ServiceError> {
    let section = section_by_id(db, m.section_id).await?;
    let image = image_ref(db, m.image_id).await?;
    Ok(DiningTable {
        id: m.id,
        section,
        table_number: m.table_number,
        capacity: m.capacity,
        position_x: m.position_x,
        position_y: m.position_y,
        width: m.width,
        height: m.height,
        image,
    })
}

pub(crate) fn table_active(t: &DiningTable) -> dining_table::ActiveModel {
    dining_table::ActiveModel {
        id: Set(t.id),
        section_id: Set(t.section.id),
        table_number: Set(t.table_number),
        capacity: Set(t.capacity),
        position_x: Set(t.position_x),
        position_y: Set(t.position_y),
        width: Set(t.width),
        height: Set(t.height),
        image_id: Set(t.image.as_ref().map(|i| i.id)),
    }
}

pub(crate) async fn menu_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Menu, ServiceError> {
    let m = menu::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("menu", id))?;
    menu_from(db, m).await
}

pub(crate) async fn menu_from(db: &DatabaseConnection, m: menu::Model) -> Result<Menu, ServiceError> {
    let restaurant = restaurant_by_id(db, m.restaurant_id).await?;
    Ok(Menu {
        id: m.id,
        restaurant,
        name: m.name,
        description: m.description,
        price: m.price,
        cover_image_url: m.cover_image_url,
    })
}

pub(crate) fn menu_active(m: &Menu) -> menu::ActiveModel {
    menu::ActiveModel {
        id: Set(m.id),
        restaurant_id: Set(m.restaurant.id),
        name: Set(m.name.clone()),
        description: Set(m.description.clone()),
        price: Set(m.price),
        cover_image_url: Set(m.cover_image_url.clone()),
    }
}

pub(crate) async fn dish_from(db: &DatabaseConnection, m: dish::Model) -> Result<Dish, ServiceError> {
    let restaurant = restaurant_by_id(db, m.restaurant_id).await?;
    let menu = menu_by_id(db, m.menu_id).await?;
    let image = image_ref(db, m.image_id).await?;
    Ok(Dish { id: m.id, restaurant, menu, name: m.name, description: m.description, price: m.price, image })
}

pub(crate) fn dish_active(d: &Dish) -> dish::ActiveModel {
    dish::ActiveModel {
        id: Set(d.id),
        restaurant_id: Set(d.restaurant.id),
        menu_id: Set(d.menu.id),
        name: Set(d.name.clone()),
        description: Set(d.description.clone()),
        price: Set(d.price),
        image_id: Set(d.image.as_ref().map(|i| i.id)),
    }
}

pub(crate) async fn reservation_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Reservation, ServiceError> {
    let m = reservation::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("reservation", id))?;
    reservation_from(db, m).await
}

pub(crate) async fn reservation_from(db: &DatabaseConnection, m: reservation::Model) -> Result<Reservation, ServiceError> {
    let user = user_by_id(db, m.user_id).await?;
    let restaurant = restaurant_by_id(db, m.restaurant_id).await?;
    let table = table_by_id(db, m.table_id).await?;
    Ok(Reservation {
        id: m.id,
        user,
        restaurant,
        table,
        reservation_date: m.reservation_date.with_timezone(&Utc),
        reservation_time: m.reservation_time,
        guest_count: m.guest_count,
        status: m.status,
        notes: m.notes,
    })
}

pub(crate) fn reservation_active(r: &Reservation) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: Set(r.id),
        user_id: Set(r.user.id),
        restaurant_id: Set(r.restaurant.id),
        table_id: Set(r.table.id),
        reservation_date: Set(r.reservation_date.into()),
        reservation_time: Set(r.reservation_time.clone()),
        guest_count: Set(r.guest_count),
        status: Set(r.status),
        notes: Set(r.notes.clone()),
    }
}

pub(crate) async fn payment_from(db: &DatabaseConnection, m: payment::Model) -> Result<Payment, ServiceError> {
    let reservation = reservation_by_id(db, m.reservation_id).await?;
    let user = user_by_id(db, m.user_id).await?;
    Ok(Payment {
        id: m.id,
        reservation,
        user,
        amount: m.amount,
        currency: m.currency,
        method: m.method,
        status: m.status,
        paid_at: m.paid_at.with_timezone(&Utc),
        reference: m.reference,
        notes: m.notes,
    })
}

pub(crate) fn payment_active(p: &Payment) -> payment::ActiveModel {
    payment::ActiveModel {
        id: Set(p.id),
        reservation_id: Set(p.reservation.id),
        user_id: Set(p.user.id),
        amount: Set(p.amount),
        currency: Set(p.currency.clone()),
        method: Set(p.method),
        status: Set(p.status),
        paid_at: Set(p.paid_at.into()),
        reference: Set(p.reference.clone()),
        notes: Set(p.notes.clone()),
    }
}

pub(crate) async fn review_from(db: &DatabaseConnection, m: review::Model) -> Result<Review, ServiceError> {
    let user = user_by_id(db, m.user_id).await?;
    let restaurant = restaurant_by_id(db, m.restaurant_id).await?;
    Ok(Review {
        id: m.id,
        user,
        restaurant,
        rating: m.rating,
        comment: m.comment,
        created_at: m.created_at.with_timezone(&Utc),
    })
}

pub(crate) fn review_active(r: &Review) -> review::ActiveModel {
    review::ActiveModel {
        id: Set(r.id),
        user_id: Set(r.user.id),
        restaurant_id: Set(r.restaurant.id),
        rating: Set(r.rating),
        comment: Set(r.comment.clone()),
        created_at: Set(r.created_at.into()),
    }
}

pub(crate) async fn plan_by_id(db: &DatabaseConnection, id: Uuid) -> Result<SubscriptionPlan, ServiceError> {
    let m = subscription_plan::Entity::find_by_id(id).one(db).await?.ok_or_else(|| dangling("subscription plan", id))?;
    plan_from(db, m).await
}

pub(crate) async fn plan_from(_db: &DatabaseConnection, m: subscription_plan::Model) -> Result<SubscriptionPlan, ServiceError> {
    Ok(SubscriptionPlan {
        id: m.id,
        name: m.name,
        tier: m.tier,
        price: m.price,
        billing_cycle: m.billing_cycle,
        status: m.status,
    })
}

pub(crate) fn plan_active(p: &SubscriptionPlan) -> subscription_plan::ActiveModel {
    subscription_plan::ActiveModel {
        id: Set(p.id),
        name: Set(p.name.clone()),
        tier: Set(p.tier),
        price: Set(p.price),
        billing_cycle: Set(p.billing_cycle),
        status: Set(p.status),
    }
}

pub(crate) async fn subscription_from(db: &DatabaseConnection, m: subscription::Model) -> Result<Subscription, ServiceError> {
    let user = user_by_id(db, m.user_id).await?;
    let restaurant = restaurant_by_id(db, m.restaurant_id).await?;
    let plan = plan_by_id(db, m.plan_id).await?;
    Ok(Subscription {
        id: m.id,
        user,
        restaurant,
        plan,
        starts_on: m.starts_on.with_timezone(&Utc),
        ends_on: m.ends_on.map(|v| v.with_timezone(&Utc)),
        status: m.status,
    })
}

pub(crate) fn subscription_active(s: &Subscription) -> subscription::ActiveModel {
    subscription::ActiveModel {
        id: Set(s.id),
        user_id: Set(s.user.id),
        restaurant_id: Set(s.restaurant.id),
        plan_id: Set(s.plan.id),
        starts_on: Set(s.starts_on.into()),
        ends_on: Set(s.ends_on.map(Into::into)),
        status: Set(s.status),
    }
}

pub(crate) async fn layout_object_from(db: &DatabaseConnection, m: layout_object::Model) -> Result<LayoutObject, ServiceError> {
    let image = image_ref(db, m.image_id).await?;
    let section_ids = section_layout_object::Entity::find()
        .filter(section_layout_object::Column::LayoutObjectId.eq(m.id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.section_id)
        .collect();
    Ok(LayoutObject {
        id: m.id,
        name: m.name,
        object_type: m.object_type,
        position_x: m.position_x,
        position_y: m.position_y,
        width: m.width,
        height: m.height,
        image,
        section_ids,
    })
}

pub(crate) fn layout_object_active(o: &LayoutObject) -> layout_object::ActiveModel {
    layout_object::ActiveModel {
        id: Set(o.id),
        name: Set(o.name.clone()),
        object_type: Set(o.object_type.clone()),
        position_x: Set(o.position_x),
        position_y: Set(o.position_y),
        width: Set(o.width),
        height: Set(o.height),
        image_id: Set(o.image.as_ref().map(|i| i.id)),
    }
}
