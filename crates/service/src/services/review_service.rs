use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dates::{self, parse_optional, DateInput};
use crate::domain::{Restaurant, Review, User};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};

/// `rating` is range-checked here at the boundary only; the service stores what it gets.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewInput {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(max = 1000))]
    pub comment: Option<String>,
    /// Defaults to now.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub created_at: Option<DateInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewInput {
    pub user_id: Option<Uuid>,
    pub restaurant_id: Option<Uuid>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[validate(length(max = 1000))]
    pub comment: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub created_at: Option<DateInput>,
}

pub struct ReviewService {
    reviews: Repo<Review>,
    users: Repo<User>,
    restaurants: Repo<Restaurant>,
}

impl ReviewService {
    pub fn new(reviews: Repo<Review>, users: Repo<User>, restaurants: Repo<Restaurant>) -> Self {
        Self { reviews, users, restaurants }
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Review>, ServiceError> {
        self.reviews.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Review, ServiceError> {
        find_required(self.reviews.as_ref(), id).await
    }

    #[instrument(skip_all, fields(restaurant_id = %input.restaurant_id))]
    pub async fn create(&self, input: CreateReviewInput) -> Result<Review, ServiceError> {
        let user = find_required(self.users.as_ref(), input.user_id).await?;
        let restaurant = find_required(self.restaurants.as_ref(), input.restaurant_id).await?;
        let created_at = parse_optional(input.created_at.as_ref(), "createdAt")?.unwrap_or_else(dates::now);

        let review = Review {
            id: Uuid::new_v4(),
            user,
            restaurant,
            rating: input.rating,
            comment: input.comment,
            created_at,
        };
        let review = self.reviews.create(review).await?;
        info!(review_id = %review.id, rating = review.rating, "review_created");
        Ok(review)
    }

    #[instrument(skip(self, input), fields(review_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateReviewInput) -> Result<Review, ServiceError> {
        let existing = self.get(id).await?;
        let user = match input.user_id {
            Some(uid) => find_required(self.users.as_ref(), uid).await?,
            None => existing.user.clone(),
        };
        let restaurant = match input.restaurant_id {
            Some(rid) => find_required(self.restaurants.as_ref(), rid).await?,
            None => existing.restaurant.clone(),
        };
        let created_at = parse_optional(input.created_at.as_ref(), "createdAt")?;

        let updated = Review {
            user,
            restaurant,
            rating: input.rating.unwrap_or(existing.rating),
            comment: input.comment.or(existing.comment),
            created_at: created_at.unwrap_or(existing.created_at),
            ..existing
        };
        let updated = self.reviews.update(updated).await?;
        info!(review_id = %updated.id, "review_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(review_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.reviews.as_ref(), id).await?;
        info!(review_id = %id, "review_deleted");
        Ok(())
    }
}
