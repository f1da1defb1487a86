//! Restaurant subscriptions to a plan.
//!
//! `endsOn` is three-state on update: omitted keeps the stored value, `null`
//! makes the subscription open-ended, a date replaces it.
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dates::{parse_date, parse_optional, DateInput};
use crate::domain::{Restaurant, Subscription, SubscriptionPlan, SubscriptionStatus, User};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionInput {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub plan_id: Uuid,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub starts_on: DateInput,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub ends_on: Option<DateInput>,
    /// Defaults to `ACTIVE`.
    pub status: Option<SubscriptionStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionInput {
    pub user_id: Option<Uuid>,
    pub restaurant_id: Option<Uuid>,
    pub plan_id: Option<Uuid>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub starts_on: Option<DateInput>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub ends_on: Option<Option<DateInput>>,
    pub status: Option<SubscriptionStatus>,
}

pub struct SubscriptionService {
    subscriptions: Repo<Subscription>,
    users: Repo<User>,
    restaurants: Repo<Restaurant>,
    plans: Repo<SubscriptionPlan>,
}

impl SubscriptionService {
    pub fn new(
        subscriptions: Repo<Subscription>,
        users: Repo<User>,
        restaurants: Repo<Restaurant>,
        plans: Repo<SubscriptionPlan>,
    ) -> Self {
        Self { subscriptions, users, restaurants, plans }
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Subscription>, ServiceError> {
        self.subscriptions.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Subscription, ServiceError> {
        find_required(self.subscriptions.as_ref(), id).await
    }

    #[instrument(skip_all, fields(restaurant_id = %input.restaurant_id, plan_id = %input.plan_id))]
    pub async fn create(&self, input: CreateSubscriptionInput) -> Result<Subscription, ServiceError> {
        let user = find_required(self.users.as_ref(), input.user_id).await?;
        let restaurant = find_required(self.restaurants.as_ref(), input.restaurant_id).await?;
        let plan = find_required(self.plans.as_ref(), input.plan_id).await?;
        let starts_on = parse_date(&input.starts_on, "startsOn")?;
        let ends_on = parse_optional(input.ends_on.as_ref(), "endsOn")?;

        let subscription = Subscription {
            id: Uuid::new_v4(),
            user,
            restaurant,
            plan,
            starts_on,
            ends_on,
            status: input.status.unwrap_or_default(),
        };
        let subscription = self.subscriptions.create(subscription).await?;
        info!(subscription_id = %subscription.id, open_ended = subscription.ends_on.is_none(), "subscription_created");
        Ok(subscription)
    }

    #[instrument(skip(self, input), fields(subscription_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateSubscriptionInput) -> Result<Subscription, ServiceError> {
        let existing = self.get(id).await?;
        let user = match input.user_id {
            Some(uid) => find_required(self.users.as_ref(), uid).await?,
            None => existing.user.clone(),
        };
        let restaurant = match input.restaurant_id {
            Some(rid) => find_required(self.restaurants.as_ref(), rid).await?,
            None => existing.restaurant.clone(),
        };
        let plan = match input.plan_id {
            Some(pid) => find_required(self.plans.as_ref(), pid).await?,
            None => existing.plan.clone(),
        };
        let starts_on = parse_optional(input.starts_on.as_ref(), "startsOn")?;
        let ends_on = match input.ends_on {
            None => existing.ends_on,
            Some(v) => parse_optional(v.as_ref(), "endsOn")?,
        };

        let updated = Subscription {
            user,
            restaurant,
            plan,
            starts_on: starts_on.unwrap_or(existing.starts_on),
            ends_on,
            status: input.status.unwrap_or(existing.status),
            ..existing
        };
        let updated = self.subscriptions.update(updated).await?;
        info!(subscription_id = %updated.id, "subscription_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(subscription_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.subscriptions.as_ref(), id).await?;
        info!(subscription_id = %id, "subscription_deleted");
        Ok(())
    }
}
