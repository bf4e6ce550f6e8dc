//! User API routes
//!
//! Reading a user requires a valid token. Updating or deleting requires
//! the path identifier to match the caller's identity, or the admin
//! flag; the check runs before any storage access.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use todo_api_shared::types::{UpdateUserRequest, UserResponse};
use uuid::Uuid;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Get an individual user's public fields
///
/// GET /api/users/:id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Returns the user, without the password hash", body = UserResponse),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "No such user", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get(&state.db, id).await?;
    Ok(Json(user))
}

/// Update a user's username, email or password
///
/// PUT /api/users/:id
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Returns the updated user", body = UserResponse),
        (status = 400, description = "Malformed fields", body = crate::error::ErrorResponse),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Caller is not this user", body = crate::error::ErrorResponse),
        (status = 404, description = "No such user", body = crate::error::ErrorResponse),
        (status = 409, description = "Username or email already in use", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update(&state.db, &auth, id, req).await?;
    Ok(Json(user))
}

/// Delete a user account
///
/// DELETE /api/users/:id
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Confirmation message", body = String),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Caller is not this user", body = crate::error::ErrorResponse),
        (status = 404, description = "No such user", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<&'static str>> {
    UserService::delete(&state.db, &auth, id).await?;
    Ok(Json("User has been deleted"))
}
