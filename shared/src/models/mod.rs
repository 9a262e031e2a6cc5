//! Data models
//!
//! Shared between the server and API clients. JSON field names are
//! camelCase; member ids are store-assigned `u64`.

pub mod member;
pub mod payment;
pub mod reminder;
pub mod stats;

// Re-exports
pub use member::*;
pub use payment::*;
pub use reminder::*;
pub use stats::*;
