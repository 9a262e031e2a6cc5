//! Member storage
//!
//! The member list lives in memory only and is owned by the server state.

mod member_store;

pub use member_store::{MemberBook, MemberStore};
