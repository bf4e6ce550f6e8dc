//! Todo API Shared Library
//!
//! This crate contains the wire-level request/response types and input
//! validation helpers shared between the backend and API consumers.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
