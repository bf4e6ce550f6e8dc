//! Authentication service: registration and login
//!
//! Password hashing and verification are offloaded to the blocking
//! thread pool so they never stall the request loop.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use sqlx::PgPool;
use todo_api_shared::types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use todo_api_shared::validation::{validate_password, validate_username};
use validator::ValidateEmail;

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    ///
    /// Validates input, rejects taken usernames and emails, hashes the
    /// password, and stores the account. Returns the public fields of
    /// the created user.
    pub async fn register(
        pool: &PgPool,
        request: RegisterRequest,
    ) -> Result<UserResponse, ApiError> {
        let username = request
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ApiError::Validation("Username is required".to_string()))?;
        let email = request
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ApiError::Validation("Email is required".to_string()))?;
        let password = request
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::Validation("Password is required".to_string()))?;

        validate_username(&username).map_err(ApiError::Validation)?;

        if !email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        validate_password(&password).map_err(ApiError::Validation)?;

        // Pre-checks give friendly errors; the unique constraints remain
        // the backstop under concurrent registration
        if UserRepository::username_exists(pool, &username).await? {
            return Err(ApiError::Duplicate("Username already taken".to_string()));
        }
        if UserRepository::email_exists(pool, &email).await? {
            return Err(ApiError::Duplicate("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &username, &email, &password_hash).await?;

        Ok(user.into())
    }

    /// Login with username and password
    ///
    /// The failure is identical for an unknown username and a wrong
    /// password, so responses cannot be used for user enumeration.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        request: LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let username = request
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ApiError::Validation("Username is required".to_string()))?;
        let password = request
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::Validation("Password is required".to_string()))?;

        let user = UserRepository::find_by_username(pool, &username)
            .await?
            .ok_or_else(|| ApiError::Authentication("Invalid credentials".to_string()))?;

        let valid = PasswordService::verify_async(password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Authentication("Invalid credentials".to_string()));
        }

        let token = jwt_service
            .issue_token(user.id, user.is_admin)
            .map_err(ApiError::Internal)?;

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }
}
