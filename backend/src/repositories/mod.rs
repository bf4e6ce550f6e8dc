//! Database repositories
//!
//! Provides data access layer for database operations. Queries return
//! `sqlx::Error` so constraint violations stay visible to the layers
//! above.

pub mod todo;
pub mod user;

pub use todo::{CreateTodo, TodoRecord, TodoRepository, UpdateTodo};
pub use user::{UpdateUser, UserRecord, UserRepository};
