//! Member API module

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/members", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/unpaid", get(handler::unpaid))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/payment", patch(handler::update_payment))
}
