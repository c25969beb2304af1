//! Log initialization for the binary.

use std::fs::OpenOptions;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{data_dir, log_path};

/// Initialize tracing with a non-blocking writer to the log file.
///
/// Keep the returned guard alive for the lifetime of the process; dropping it
/// flushes buffered log lines.
pub fn init() -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir())?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
