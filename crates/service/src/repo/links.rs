//! Parent re-resolution for the in-memory backend.
//!
//! Each link struct holds the repositories of an entity's parents and swaps the
//! stored parent copies for the current rows, the same walk `seaorm::load` does
//! through foreign keys. A parent that has since been deleted keeps its stored copy.
use async_trait::async_trait;

use crate::domain::*;
use crate::errors::ServiceError;
use crate::repository::{Entity, Repo};

#[async_trait]
pub trait Relink<T>: Send + Sync {
    async fn relink(&self, row: T) -> Result<T, ServiceError>;
}

async fn current<P: Entity>(repo: &Repo<P>, stored: P) -> Result<P, ServiceError> {
    Ok(repo.find_by_id(stored.id()).await?.unwrap_or(stored))
}

async fn current_opt<P: Entity>(repo: &Repo<P>, stored: Option<P>) -> Result<Option<P>, ServiceError> {
    match stored {
        Some(p) => current(repo, p).await.map(Some),
        None => Ok(None),
    }
}

pub struct RestaurantLinks {
    pub images: Repo<Image>,
}

#[async_trait]
impl Relink<Restaurant> for RestaurantLinks {
    async fn relink(&self, mut r: Restaurant) -> Result<Restaurant, ServiceError> {
        r.image = current_opt(&self.images, r.image).await?;
        Ok(r)
    }
}

pub struct SectionLinks {
    pub restaurants: Repo<Restaurant>,
}

#[async_trait]
impl Relink<Section> for SectionLinks {
    async fn relink(&self, mut s: Section) -> Result<Section, ServiceError> {
        s.restaurant = current(&self.restaurants, s.restaurant).await?;
        Ok(s)
    }
}

/// The table's restaurant follows its section.
pub struct TableLinks {
    pub sections: Repo<Section>,
    pub images: Repo<Image>,
}

#[async_trait]
impl Relink<DiningTable> for TableLinks {
    async fn relink(&self, mut t: DiningTable) -> Result<DiningTable, ServiceError> {
        t.section = current(&self.sections, t.section).await?;
        t.image = current_opt(&self.images, t.image).await?;
        Ok(t)
    }
}

pub struct MenuLinks {
    pub restaurants: Repo<Restaurant>,
}

#[async_trait]
impl Relink<Menu> for MenuLinks {
    async fn relink(&self, mut m: Menu) -> Result<Menu, ServiceError> {
        m.restaurant = current(&self.restaurants, m.restaurant).await?;
        Ok(m)
    }
}

pub struct DishLinks {
    pub restaurants: Repo<Restaurant>,
    pub menus: Repo<Menu>,
    pub images: Repo<Image>,
}

#[async_trait]
impl Relink<Dish> for DishLinks {
    async fn relink(&self, mut d: Dish) -> Result<Dish, ServiceError> {
        d.restaurant = current(&self.restaurants, d.restaurant).await?;
        d.menu = current(&self.menus, d.menu).await?;
        d.image = current_opt(&self.images, d.image).await?;
        Ok(d)
    }
}

pub struct ReservationLinks {
    pub users: Repo<User>,
    pub restaurants: Repo<Restaurant>,
    pub tables: Repo<DiningTable>,
}

#[async_trait]
impl Relink<Reservation> for ReservationLinks {
    async fn relink(&self, mut r: Reservation) -> Result<Reservation, ServiceError> {
        r.user = current(&self.users, r.user).await?;
        r.restaurant = current(&self.restaurants, r.restaurant).await?;
        r.table = current(&self.tables, r.table).await?;
        Ok(r)
    }
}

pub struct PaymentLinks {
    pub reservations: Repo<Reservation>,
    pub users: Repo<User>,
}

#[async_trait]
impl Relink<Payment> for PaymentLinks {
    async fn relink(&self, mut p: Payment) -> Result<Payment, ServiceError> {
        p.reservation = current(&self.reservations, p.reservation).await?;
        p.user = current(&self.users, p.user).await?;
        Ok(p)
    }
}

pub struct ReviewLinks {
    pub users: Repo<User>,
    pub restaurants: Repo<Restaurant>,
}

#[async_trait]
impl Relink<Review> for ReviewLinks {
    async fn relink(&self, mut r: Review) -> Result<Review, ServiceError> {
        r.user = current(&self.users, r.user).await?;
        r.restaurant = current(&self.restaurants, r.restaurant).await?;
        Ok(r)
    }
}

pub struct SubscriptionLinks {
    pub users: Repo<User>,
    pub restaurants: Repo<Restaurant>,
    pub plans: Repo<SubscriptionPlan>,
}

#[async_trait]
impl Relink<Subscription> for SubscriptionLinks {
    async fn relink(&self, mut s: Subscription) -> Result<Subscription, ServiceError> {
        s.user = current(&self.users, s.user).await?;
        s.restaurant = current(&self.restaurants, s.restaurant).await?;
        s.plan = current(&self.plans, s.plan).await?;
        Ok(s)
    }
}

pub struct LayoutObjectLinks {
    pub images: Repo<Image>,
}

#[async_trait]
impl Relink<LayoutObject> for LayoutObjectLinks {
    async fn relink(&self, mut o: LayoutObject) -> Result<LayoutObject, ServiceError> {
        o.image = current_opt(&self.images, o.image).await?;
        Ok(o)
    }
}
