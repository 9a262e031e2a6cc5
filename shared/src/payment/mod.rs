//! Payment status derivation and collection statistics
//!
//! Pure functions over the member list. They never mutate their input
//! and are cheap enough to rerun after every mutation.

mod stats;
mod status;

pub use stats::{compute_stats, status_breakdown};
pub use status::derive_payment_status;
