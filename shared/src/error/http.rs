//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::MemberNotFound | Self::ReminderTemplateNotFound => {
                StatusCode::NOT_FOUND
            }

            // 503 Service Unavailable (transient errors, client can retry)
            Self::ReminderQueueFull | Self::ReminderDispatcherClosed => {
                StatusCode::SERVICE_UNAVAILABLE
            }

            // 504 Gateway Timeout
            Self::TimeoutError => StatusCode::GATEWAY_TIMEOUT,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
