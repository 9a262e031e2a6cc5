//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty stdout) and production
//! (JSON lines, optional daily rolling files).

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (info, stdout, text)
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger
///
/// `RUST_LOG` takes precedence over `log_level`. When `log_dir` names an
/// existing directory, output goes to a daily rolling file there instead of
/// stdout. Calling this twice is harmless; the second call is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "chama_server={level},shared={level},tower_http={level}"
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = resolve_log_dir(log_dir)
        .map(|dir| tracing_appender::rolling::daily(dir, "chama-server"));
    let to_file = file_appender.is_some();

    let result = match (json, file_appender) {
        (true, Some(writer)) => builder.json().with_writer(writer).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(writer)) => builder.with_ansi(false).with_writer(writer).try_init(),
        (false, None) => builder.try_init(),
    };

    if result.is_ok()
        && let Some(dir) = log_dir
        && !to_file
    {
        tracing::warn!("Log directory {} does not exist, logging to stdout", dir);
    }
}

/// Return `log_dir` when it names an existing directory
fn resolve_log_dir(log_dir: Option<&str>) -> Option<&str> {
    log_dir.filter(|dir| Path::new(dir).is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(resolve_log_dir(Some(path)), Some(path));
    }

    #[test]
    fn test_resolve_missing_dir() {
        assert_eq!(resolve_log_dir(Some("/definitely/not/here")), None);
        assert_eq!(resolve_log_dir(None), None);
    }
}
