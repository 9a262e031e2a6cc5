use thiserror::Error;

/// Errors that stop the server process (startup and serving)
///
/// Request-level failures use [`shared::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
