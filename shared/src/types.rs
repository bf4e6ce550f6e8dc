//! API request and response types
//!
//! JSON field names follow the public API contract: multi-word fields are
//! camelCase on the wire (`isDone`, `ownerId`, `createdAt`).
//!
//! Request bodies use `Option` for every field so that a missing field is
//! reported through the error taxonomy (400 with the uniform envelope)
//! rather than rejected by the JSON extractor, and so that updates can
//! distinguish "field absent" from "field present".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A user's public fields. There is no password hash field on this type,
/// so the hash cannot appear in a response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Successful login: the bearer token alongside the user's public fields,
/// flattened into a single object.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: UserResponse,
}

/// Partial user update. Only the fields present in the request are applied;
/// the admin flag is deliberately not part of this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Todo creation request. `isDone` may be supplied and defaults to false.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub is_done: Option<bool>,
}

/// Partial todo update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub is_done: Option<bool>,
}

/// Todo as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub name: String,
    pub desc: String,
    pub is_done: bool,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing query for `GET /api/todos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTodosQuery {
    /// Page size; non-positive values disable pagination
    pub limit: Option<i64>,
    /// 1-indexed page number
    pub page: Option<i64>,
}

impl ListTodosQuery {
    /// Resolve the query into a SQL `LIMIT`/`OFFSET` pair.
    ///
    /// Pagination applies only when both `limit` and `page` are present and
    /// the limit is positive; otherwise the full listing is returned. The
    /// skip `(page × limit) − limit` is clamped to zero, so a zero or
    /// negative page yields the first page instead of a negative offset.
    pub fn limit_offset(&self) -> Option<(i64, i64)> {
        match (self.limit, self.page) {
            (Some(limit), Some(page)) if limit > 0 => {
                let offset = page.saturating_mul(limit).saturating_sub(limit).max(0);
                Some((limit, offset))
            }
            _ => None,
        }
    }
}
