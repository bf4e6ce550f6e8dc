//! Authentication routes
//!
//! Provides endpoints for user registration and login. Both are open;
//! everything else in the API requires the token issued here.

use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use todo_api_shared::types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Returns the created user, without the password hash", body = UserResponse),
        (status = 400, description = "Missing or malformed fields", body = crate::error::ErrorResponse),
        (status = 409, description = "Username or email already in use", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = AuthService::register(&state.db, req).await?;
    Ok(Json(user))
}

/// Login with username and password
///
/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Returns the bearer token alongside the user's public fields", body = LoginResponse),
        (status = 400, description = "Missing fields", body = crate::error::ErrorResponse),
        (status = 401, description = "Unknown username or wrong password", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = AuthService::login(&state.db, state.jwt(), req).await?;
    Ok(Json(response))
}
