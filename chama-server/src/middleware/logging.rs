//! Request logging middleware

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use http::StatusCode;
use std::time::Instant;
use tracing::Level;

/// Log every request with its id, matched route, status and latency
///
/// Runs inside the request-id layer, so `x-request-id` is normally set;
/// a fresh id is generated when it is not.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    macro_rules! completed {
        ($level:ident, $msg:literal) => {
            tracing::$level!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = status.as_u16(),
                latency_ms,
                $msg
            )
        };
    }

    let level = completion_level(status);
    if level == Level::ERROR {
        completed!(error, "Request completed with server error");
    } else if level == Level::WARN {
        completed!(warn, "Request completed with client error");
    } else {
        completed!(info, "Request completed");
    }

    response
}

/// 5xx logs at error, 4xx at warn, everything else at info
fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}
