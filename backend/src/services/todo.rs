//! Todo service
//!
//! Reads require only a valid token. Mutations additionally require the
//! caller to own the todo (or hold the admin flag); the record is
//! fetched first, so a missing todo reports 404 before any ownership
//! verdict.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{CreateTodo, TodoRecord, TodoRepository, UpdateTodo};
use sqlx::PgPool;
use todo_api_shared::types::{CreateTodoRequest, ListTodosQuery, TodoResponse, UpdateTodoRequest};
use uuid::Uuid;

impl From<TodoRecord> for TodoResponse {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            desc: record.description,
            is_done: record.is_done,
            owner_id: record.owner_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Todo service
pub struct TodoService;

impl TodoService {
    /// Create a todo owned by the caller
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        request: CreateTodoRequest,
    ) -> Result<TodoResponse, ApiError> {
        let name = request
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::Validation("Name is required".to_string()))?;
        let description = request
            .desc
            .filter(|d| !d.is_empty())
            .ok_or_else(|| ApiError::Validation("Description is required".to_string()))?;

        let todo = TodoRepository::create(
            pool,
            CreateTodo {
                name,
                description,
                is_done: request.is_done.unwrap_or(false),
                owner_id,
            },
        )
        .await?;

        Ok(todo.into())
    }

    /// Get a single todo
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<TodoResponse, ApiError> {
        let todo = TodoRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

        Ok(todo.into())
    }

    /// List todos, optionally paginated
    pub async fn list(
        pool: &PgPool,
        query: &ListTodosQuery,
    ) -> Result<Vec<TodoResponse>, ApiError> {
        let todos = TodoRepository::list(pool, query.limit_offset()).await?;

        Ok(todos.into_iter().map(Into::into).collect())
    }

    /// Apply a partial update to a todo
    ///
    /// Fields absent from the request keep their stored values; fields
    /// that are present must be non-empty.
    pub async fn update(
        pool: &PgPool,
        caller: &AuthUser,
        id: Uuid,
        request: UpdateTodoRequest,
    ) -> Result<TodoResponse, ApiError> {
        let existing = TodoRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

        caller.authorize(existing.owner_id)?;

        if matches!(&request.name, Some(name) if name.is_empty()) {
            return Err(ApiError::Validation("Name cannot be empty".to_string()));
        }
        if matches!(&request.desc, Some(desc) if desc.is_empty()) {
            return Err(ApiError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }

        let updates = UpdateTodo {
            name: request.name,
            description: request.desc,
            is_done: request.is_done,
        };

        let todo = TodoRepository::update(pool, id, updates)
            .await?
            .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

        Ok(todo.into())
    }

    /// Delete a todo
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: Uuid) -> Result<(), ApiError> {
        let existing = TodoRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

        caller.authorize(existing.owner_id)?;

        let deleted = TodoRepository::delete(pool, id).await?;
        if !deleted {
            return Err(ApiError::NotFound("Todo not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // CRUD flows including ownership and pagination are exercised by
    // the integration tests in backend/tests.
}
