use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::utils::time;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | BUSINESS_TIMEZONE | Africa/Nairobi | zone used to decide "today" for due dates |
/// | LOG_LEVEL | info | default filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily rolling log files go here when the directory exists |
/// | LOG_JSON | false | emit JSON log lines |
/// | REMINDER_QUEUE_CAPACITY | 256 | pending reminder batches before sends are refused |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
///
/// ```ignore
/// HTTP_PORT=8080 BUSINESS_TIMEZONE=Africa/Kampala cargo run -p chama-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Business timezone; due dates are compared against the local date here
    pub business_timezone: Tz,
    /// Default log filter
    pub log_level: String,
    /// Log directory (stdout when unset)
    pub log_dir: Option<String>,
    /// JSON log format
    pub log_json: bool,
    /// Capacity of the reminder dispatch queue (in batches)
    pub reminder_queue_capacity: usize,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            business_timezone: time::parse_timezone(
                &std::env::var("BUSINESS_TIMEZONE")
                    .unwrap_or_else(|_| time::DEFAULT_TIMEZONE.into()),
            ),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            reminder_queue_capacity: std::env::var("REMINDER_QUEUE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(256),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Today's calendar date in the business timezone
    pub fn today(&self) -> NaiveDate {
        time::today_in(self.business_timezone)
    }
}
