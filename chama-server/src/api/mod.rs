//! HTTP API
//!
//! # Routes
//!
//! | Module | Prefix | Description |
//! |--------|--------|-------------|
//! | health | /health | service status |
//! | members | /api/members | member list, creation, payment toggle |
//! | stats | /api/stats | collection statistics |
//! | reminders | /api/reminders | templates, preview and dispatch |

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Uri};
use tower::{BoxError, ServiceBuilder};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;
use crate::utils::{AppError, ErrorCode};

pub mod extract;
pub mod health;
pub mod members;
pub mod reminders;
pub mod stats;

/// UUID v4 request id generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(members::router())
        .merge(stats::router())
        .merge(reminders::router())
}

/// Build the application with all middleware
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    with_middleware(build_router(), state)
}

fn with_middleware(router: Router<ServerState>, state: &ServerState) -> Router<ServerState> {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    router
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(timeout),
        )
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::new(ErrorCode::TimeoutError)
    } else {
        AppError::internal(err.to_string())
    }
}
