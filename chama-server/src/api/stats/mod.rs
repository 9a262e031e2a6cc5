//! Collection statistics route

use axum::{Router, extract::State, routing::get};
use chrono::NaiveDate;
use serde::Serialize;
use shared::ApiResponse;
use shared::models::{ChamaStats, StatusBreakdown};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/stats", get(stats))
}

/// Dashboard totals plus the pending/overdue split
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: ChamaStats,
    pub breakdown: StatusBreakdown,
    /// Business date the breakdown was derived for
    pub as_of: NaiveDate,
}

/// GET /api/stats
async fn stats(State(state): State<ServerState>) -> ApiResponse<StatsResponse> {
    let today = state.today();
    let (stats, breakdown) = state.members.stats(today).await;
    ApiResponse::success(StatsResponse {
        stats,
        breakdown,
        as_of: today,
    })
}
