//! Todo API routes
//!
//! All routes require a valid token. Update and delete additionally
//! require ownership of the todo (or the admin flag).

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::TodoService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use todo_api_shared::types::{CreateTodoRequest, ListTodosQuery, TodoResponse, UpdateTodoRequest};
use uuid::Uuid;

/// Create todo routes
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_todo).get(list_todos))
        .route("/:id", get(get_todo).put(update_todo).delete(delete_todo))
}

/// Create a new todo owned by the caller
///
/// POST /api/todos
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Returns the created todo", body = TodoResponse),
        (status = 400, description = "Missing name or description", body = crate::error::ErrorResponse),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "todos"
)]
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<Json<TodoResponse>> {
    let todo = TodoService::create(&state.db, auth.user_id, req).await?;
    Ok(Json(todo))
}

/// List todos with or without pagination
///
/// GET /api/todos?limit&page
#[utoipa::path(
    get,
    path = "/api/todos",
    params(ListTodosQuery),
    responses(
        (status = 200, description = "Returns todos in creation order", body = [TodoResponse]),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "todos"
)]
pub async fn list_todos(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListTodosQuery>,
) -> ApiResult<Json<Vec<TodoResponse>>> {
    let todos = TodoService::list(&state.db, &query).await?;
    Ok(Json(todos))
}

/// Get an individual todo
///
/// GET /api/todos/:id
#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    params(("id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Returns the todo", body = TodoResponse),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "No such todo", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "todos"
)]
pub async fn get_todo(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TodoResponse>> {
    let todo = TodoService::get(&state.db, id).await?;
    Ok(Json(todo))
}

/// Update a todo's fields
///
/// PUT /api/todos/:id
#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    params(("id" = Uuid, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Returns the updated todo", body = TodoResponse),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Caller does not own this todo", body = crate::error::ErrorResponse),
        (status = 404, description = "No such todo", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "todos"
)]
pub async fn update_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTodoRequest>,
) -> ApiResult<Json<TodoResponse>> {
    let todo = TodoService::update(&state.db, &auth, id, req).await?;
    Ok(Json(todo))
}

/// Delete a todo
///
/// DELETE /api/todos/:id
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(("id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Confirmation message", body = String),
        (status = 401, description = "Caller is not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Caller does not own this todo", body = crate::error::ErrorResponse),
        (status = 404, description = "No such todo", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "todos"
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<&'static str>> {
    TodoService::delete(&state.db, &auth, id).await?;
    Ok(Json("Todo has been deleted"))
}
