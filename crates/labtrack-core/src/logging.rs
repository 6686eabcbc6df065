//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "LABTRACK_LOG";

const LOG_FILE_NAME: &str = "labtrack.log";

/// Filter used when `LABTRACK_LOG` is unset or invalid
const DEFAULT_FILTER: &str =
    "labtrack=info,labtrack_core=info,labtrack_api=info,labtrack_app=info,labtrack_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/labtrack/logs/` because the TUI owns
/// stdout. Log level is controlled by the `LABTRACK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LABTRACK_LOG=debug labtrack
/// LABTRACK_LOG=labtrack_app=trace labtrack
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("labtrack starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("labtrack").join("logs")
}

/// Get the log file path (base name; the appender adds a date suffix)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}
