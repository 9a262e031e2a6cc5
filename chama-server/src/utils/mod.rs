//! Utility module
//!
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - business timezone helpers

pub mod logger;
pub mod time;

// Re-export error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
