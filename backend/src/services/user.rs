//! User service for profile reads, updates and deletion
//!
//! Ownership for user resources is decided from the path identifier and
//! the token alone, before any storage access. A caller holding a valid
//! token for user A learns nothing about whether user B exists.

use crate::auth::{AuthUser, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UpdateUser, UserRecord, UserRepository};
use sqlx::PgPool;
use todo_api_shared::types::{UpdateUserRequest, UserResponse};
use todo_api_shared::validation::{validate_password, validate_username};
use uuid::Uuid;
use validator::ValidateEmail;

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            is_admin: record.is_admin,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// User service for account management
pub struct UserService;

impl UserService {
    /// Get a user's public fields
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Apply a partial update to a user
    ///
    /// Only username, email and password can change; a new password is
    /// re-hashed before storage. The admin flag is never touched.
    pub async fn update(
        pool: &PgPool,
        caller: &AuthUser,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        caller.authorize(id)?;

        let current = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        if let Some(username) = &request.username {
            validate_username(username).map_err(ApiError::Validation)?;
            if *username != current.username
                && UserRepository::username_exists(pool, username).await?
            {
                return Err(ApiError::Duplicate("Username already taken".to_string()));
            }
        }

        if let Some(email) = &request.email {
            if !email.validate_email() {
                return Err(ApiError::Validation("Invalid email format".to_string()));
            }
            if *email != current.email && UserRepository::email_exists(pool, email).await? {
                return Err(ApiError::Duplicate("Email already registered".to_string()));
            }
        }

        let password_hash = match request.password {
            Some(password) => {
                validate_password(&password).map_err(ApiError::Validation)?;
                Some(
                    PasswordService::hash_async(password)
                        .await
                        .map_err(ApiError::Internal)?,
                )
            }
            None => None,
        };

        let updates = UpdateUser {
            username: request.username,
            email: request.email,
            password_hash,
        };

        let user = UserRepository::update(pool, id, updates)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Delete a user account and, via cascade, their todos
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: Uuid) -> Result<(), ApiError> {
        caller.authorize(id)?;

        let deleted = UserRepository::delete(pool, id).await?;
        if !deleted {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
