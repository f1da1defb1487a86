use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::User;
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub names: String,
    #[validate(length(min = 1, max = 15))]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub names: Option<String>,
    #[validate(length(min = 1, max = 15))]
    pub phone: Option<String>,
}

pub struct UserService {
    users: Repo<User>,
}

impl UserService {
    pub fn new(users: Repo<User>) -> Self { Self { users } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<User>, ServiceError> {
        self.users.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<User, ServiceError> {
        find_required(self.users.as_ref(), id).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateUserInput) -> Result<User, ServiceError> {
        let user = User { id: Uuid::new_v4(), email: input.email, names: input.names, phone: input.phone };
        let user = self.users.create(user).await?;
        info!(user_id = %user.id, "user_created");
        Ok(user)
    }

    #[instrument(skip(self, input), fields(user_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateUserInput) -> Result<User, ServiceError> {
        let existing = self.get(id).await?;
        let updated = User {
            email: input.email.unwrap_or(existing.email),
            names: input.names.unwrap_or(existing.names),
            phone: input.phone.unwrap_or(existing.phone),
            ..existing
        };
        let updated = self.users.update(updated).await?;
        info!(user_id = %updated.id, "user_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.users.as_ref(), id).await?;
        info!(user_id = %id, "user_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn input() -> CreateUserInput {
        CreateUserInput { email: "ana@example.com".into(), names: "Ana Ruiz".into(), phone: "555-0100".into() }
    }

    #[tokio::test]
    async fn create_then_get_roundtrips() {
        let s = test_support::services();
        let created = s.users.create(input()).await.unwrap();
        let fetched = s.users.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(fetched.email, "ana@example.com");
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let created = s.users.create(input()).await.unwrap();
        let updated = s.users.update(created.id, UpdateUserInput::default()).await.unwrap();
        assert_eq!(created, updated);
    }

    #[tokio::test]
    async fn partial_patch_keeps_other_fields() {
        let s = test_support::services();
        let created = s.users.create(input()).await.unwrap();
        let updated = s.users
            .update(created.id, UpdateUserInput { phone: Some("555-0199".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.phone, "555-0199");
        assert_eq!(updated.names, created.names);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let s = test_support::services();
        let created = s.users.create(input()).await.unwrap();
        s.users.delete(created.id).await.unwrap();
        assert!(matches!(s.users.get(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(s.users.delete(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn input_shape_is_checked_at_the_boundary() {
        let mut bad = input();
        bad.email = "not-an-email".into();
        bad.phone = "1234567890123456".into();
        let errs = bad.validate().unwrap_err();
        let fields = errs.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }
}
