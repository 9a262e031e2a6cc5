//! Reminder API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reminders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::send))
        .route("/preview", post(handler::preview))
        .route("/templates", get(handler::list_templates))
        .route("/templates/{id}", get(handler::get_template))
}
