use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{BillingCycle, PlanStatus, SubscriptionPlan, SubscriptionTier};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::validation::non_negative;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionPlanInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub tier: SubscriptionTier,
    #[validate(custom(function = non_negative))]
    pub price: Decimal,
    pub billing_cycle: BillingCycle,
    pub status: PlanStatus,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionPlanInput {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub tier: Option<SubscriptionTier>,
    #[validate(custom(function = non_negative))]
    pub price: Option<Decimal>,
    pub billing_cycle: Option<BillingCycle>,
    pub status: Option<PlanStatus>,
}

pub struct SubscriptionPlanService {
    plans: Repo<SubscriptionPlan>,
}

impl SubscriptionPlanService {
    pub fn new(plans: Repo<SubscriptionPlan>) -> Self { Self { plans } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<SubscriptionPlan>, ServiceError> {
        self.plans.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<SubscriptionPlan, ServiceError> {
        find_required(self.plans.as_ref(), id).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateSubscriptionPlanInput) -> Result<SubscriptionPlan, ServiceError> {
        let plan = SubscriptionPlan {
            id: Uuid::new_v4(),
            name: input.name,
            tier: input.tier,
            price: input.price,
            billing_cycle: input.billing_cycle,
            status: input.status,
        };
        let plan = self.plans.create(plan).await?;
        info!(subscription_plan_id = %plan.id, tier = ?plan.tier, "subscription_plan_created");
        Ok(plan)
    }

    #[instrument(skip(self, input), fields(plan_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateSubscriptionPlanInput) -> Result<SubscriptionPlan, ServiceError> {
        let existing = self.get(id).await?;
        let updated = SubscriptionPlan {
            name: input.name.unwrap_or(existing.name),
            tier: input.tier.unwrap_or(existing.tier),
            price: input.price.unwrap_or(existing.price),
            billing_cycle: input.billing_cycle.unwrap_or(existing.billing_cycle),
            status: input.status.unwrap_or(existing.status),
            ..existing
        };
        let updated = self.plans.update(updated).await?;
        info!(subscription_plan_id = %updated.id, "subscription_plan_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(plan_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.plans.as_ref(), id).await?;
        info!(subscription_plan_id = %id, "subscription_plan_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn create_update_roundtrip() {
        let s = test_support::services();
        let plan = test_support::plan(&s).await;
        let fetched = s.plans.get(plan.id).await.unwrap();
        assert_eq!(plan, fetched);

        let updated = s.plans
            .update(plan.id, UpdateSubscriptionPlanInput { status: Some(PlanStatus::Inactive), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.status, PlanStatus::Inactive);
        assert_eq!(updated.price, plan.price);
    }

    #[test]
    fn negative_price_fails_shape_validation() {
        let input = CreateSubscriptionPlanInput {
            name: "Basic".into(),
            tier: SubscriptionTier::Basic,
            price: Decimal::new(-100, 2),
            billing_cycle: BillingCycle::Monthly,
            status: PlanStatus::Active,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn unknown_tier_fails_decoding() {
        let raw = r#"{"name":"X","tier":"GOLD","price":1,"billingCycle":"MONTHLY","status":"ACTIVE"}"#;
        assert!(serde_json::from_str::<CreateSubscriptionPlanInput>(raw).is_err());
    }
}
