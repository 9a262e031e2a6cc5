//! Chama Server - member payment tracking for a Chama savings group
//!
//! # Module layout
//!
//! ```text
//! chama-server/src/
//! ├── core/          # config, state, server, errors
//! ├── store/         # in-memory member store
//! ├── reminders/     # templates, rendering, dispatch queue
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! └── utils/         # logger, timezone helpers
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod reminders;
pub mod store;
pub mod utils;

pub use self::core::{Config, Server, ServerError, ServerState};
pub use reminders::{LogNotifier, Notifier};
pub use store::MemberStore;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() -> Result<Config, ServerError> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(ServerError::Config(format!("Failed to load .env: {}", e)));
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ________
  / ____/ /_  ____ _____ ___  ____ _
 / /   / __ \/ __ `/ __ `__ \/ __ `/
/ /___/ / / / /_/ / / / / / / /_/ /
\____/_/ /_/\__,_/_/ /_/ /_/\__,_/
    "#
    );
}
