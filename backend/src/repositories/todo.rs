//! Todo repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Todo record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_done: bool,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a todo
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub name: String,
    pub description: String,
    pub is_done: bool,
    pub owner_id: Uuid,
}

/// Input for updating a todo, absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateTodo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_done: Option<bool>,
}

/// Todo repository for database operations
pub struct TodoRepository;

impl TodoRepository {
    /// Create a new todo
    pub async fn create(pool: &PgPool, input: CreateTodo) -> Result<TodoRecord, sqlx::Error> {
        sqlx::query_as::<_, TodoRecord>(
            r#"
            INSERT INTO todos (name, description, is_done, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, is_done, owner_id, created_at, updated_at
            "#,
        )
        .bind(input.name)
        .bind(input.description)
        .bind(input.is_done)
        .bind(input.owner_id)
        .fetch_one(pool)
        .await
    }

    /// Find todo by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TodoRecord>, sqlx::Error> {
        sqlx::query_as::<_, TodoRecord>(
            r#"
            SELECT id, name, description, is_done, owner_id, created_at, updated_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List todos in stable creation order
    ///
    /// `limit_offset` applies a page window; `None` returns everything.
    /// Ties on `created_at` are broken by `id` so pages never overlap.
    pub async fn list(
        pool: &PgPool,
        limit_offset: Option<(i64, i64)>,
    ) -> Result<Vec<TodoRecord>, sqlx::Error> {
        match limit_offset {
            Some((limit, offset)) => {
                sqlx::query_as::<_, TodoRecord>(
                    r#"
                    SELECT id, name, description, is_done, owner_id, created_at, updated_at
                    FROM todos
                    ORDER BY created_at ASC, id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
            }
            None => {
                sqlx::query_as::<_, TodoRecord>(
                    r#"
                    SELECT id, name, description, is_done, owner_id, created_at, updated_at
                    FROM todos
                    ORDER BY created_at ASC, id ASC
                    "#,
                )
                .fetch_all(pool)
                .await
            }
        }
    }

    /// Apply a partial update, returning the new record
    ///
    /// Returns `None` when no todo with this ID exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateTodo,
    ) -> Result<Option<TodoRecord>, sqlx::Error> {
        sqlx::query_as::<_, TodoRecord>(
            r#"
            UPDATE todos SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_done = COALESCE($4, is_done),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, is_done, owner_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(updates.name)
        .bind(updates.description)
        .bind(updates.is_done)
        .fetch_optional(pool)
        .await
    }

    /// Delete a todo, returning whether a row was removed
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
