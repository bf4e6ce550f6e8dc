//! Authentication extractor
//!
//! Provides the Axum extractor for JWT validation and user extraction,
//! plus the ownership checks used by protected handlers.
//!
//! Uses pre-computed JWT keys from AppState to avoid expensive key
//! derivation on every request.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated caller extracted from a JWT
///
/// Validates the token from the `authorization` header and exposes the
/// caller's identity and admin flag to handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl AuthUser {
    /// Whether this caller may act on a resource owned by `owner_id`
    pub fn can_access(&self, owner_id: Uuid) -> bool {
        self.is_admin || self.user_id == owner_id
    }

    /// Ownership check returning the standard 403 on mismatch
    pub fn authorize(&self, owner_id: Uuid) -> Result<(), ApiError> {
        if self.can_access(owner_id) {
            Ok(())
        } else {
            Err(ApiError::Authorization("You are not authorized".to_string()))
        }
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Authentication("You are not authenticated".to_string()))?;

        // Accept both "Bearer <token>" and a bare token value
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let claims = app_state.jwt().verify_token(token)?;

        // Parse user ID from claims
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::InvalidToken)?;

        Ok(AuthUser {
            user_id,
            is_admin: claims.is_admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_can_access_own_resource() {
        let user_id = Uuid::new_v4();
        let user = AuthUser {
            user_id,
            is_admin: false,
        };
        assert!(user.can_access(user_id));
        assert!(user.authorize(user_id).is_ok());
    }

    #[test]
    fn test_non_owner_is_rejected() {
        let user = AuthUser {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        let other = Uuid::new_v4();
        assert!(!user.can_access(other));
        assert!(matches!(
            user.authorize(other),
            Err(ApiError::Authorization(_))
        ));
    }

    #[test]
    fn test_admin_can_access_any_resource() {
        let admin = AuthUser {
            user_id: Uuid::new_v4(),
            is_admin: true,
        };
        assert!(admin.can_access(Uuid::new_v4()));
        assert!(admin.authorize(Uuid::new_v4()).is_ok());
    }
}
