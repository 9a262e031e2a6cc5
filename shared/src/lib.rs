//! Shared types for the Chama tracker
//!
//! Domain models, the pure payment logic (status derivation and collection
//! statistics), payload validation rules and the unified error system.

pub mod error;
pub mod models;
pub mod payment;
pub mod util;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
