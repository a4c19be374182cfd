//! Logging Infrastructure
//!
//! Console logging by default, with optional daily-rolling file output when a
//! log directory is configured.

use std::path::Path;

/// Initialize the logger with default settings (console, info level)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output.
///
/// `log_level` falls back to "info" when unset or unparsable. `log_dir` must
/// already exist; otherwise logging stays on the console.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "booking-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
        eprintln!("Log directory {dir} does not exist, falling back to console logging");
    }

    subscriber.init();
}
