// turf/src/logging.rs
// File logging. stdout belongs to the terminal UI, so everything goes to a file.
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "turf.log";

/// `$TURF_LOG_DIR`, otherwise the system temp dir.
pub fn log_dir() -> PathBuf {
    std::env::var("TURF_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
}

/// Installs the global subscriber. Keep the guard alive for the whole run or
/// buffered lines are lost.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard, tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()?;
    Ok(guard)
}
