//! Business logic services
//!
//! Services encapsulate business rules (input validation, uniqueness,
//! ownership) and coordinate between repositories and the auth
//! primitives.

pub mod auth;
pub mod todo;
pub mod user;

pub use auth::AuthService;
pub use todo::TodoService;
pub use user::UserService;
