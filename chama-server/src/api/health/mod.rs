//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | service status |
//!
//! ```json
//! {
//!   "code": 0,
//!   "message": "OK",
//!   "data": {
//!     "status": "ok",
//!     "service": "chama-server",
//!     "version": "0.1.0",
//!     "uptimeSeconds": 12,
//!     "members": 3,
//!     "reminderQueue": "ok"
//!   }
//! }
//! ```

use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use shared::ApiResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    members: usize,
    /// ok | closed
    reminder_queue: &'static str,
}

async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    let queue_closed = state.reminders.is_closed();
    ApiResponse::success(HealthResponse {
        status: if queue_closed { "degraded" } else { "ok" },
        service: "chama-server",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        members: state.members.len().await,
        reminder_queue: if queue_closed { "closed" } else { "ok" },
    })
}
