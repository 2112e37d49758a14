use crate::engine::AlphabetError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "alphabet-tutor.log";

/// Diagnostics go to a file; stdout belongs to the screen
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Install the global subscriber. Verbosity follows `RUST_LOG`, default `info`.
pub fn init() -> Result<(), AlphabetError> {
    let path = log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|err| AlphabetError::Logging(format!("{}: {}", path.display(), err)))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AlphabetError::Logging(err.to_string()))?;

    info!(path = %path.display(), "logging started");
    Ok(())
}
