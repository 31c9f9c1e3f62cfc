use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Environment variable naming a log file; stderr is used when unset.
pub const LOG_FILE_ENV: &str = "WIDGET_STORE_LOG";

/// Initialize tracing.
///
/// `RUST_LOG` wins over the configured level. When `WIDGET_STORE_LOG` is
/// set, output goes to `{path}.{pid}` instead of stderr so concurrent
/// instances never share a file. Calling this twice is a no-op.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        let unique_path = format!("{}.{}", log_path, std::process::id());
        match std::fs::File::create(&unique_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(UtcTime::rfc_3339());
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .try_init();
                return;
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log file {}: {}", unique_path, e);
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(UtcTime::rfc_3339());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
