use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{MintError, Result};

/// Starts the per-run log: a timestamped file under `dir` plus stdout.
///
/// Called exactly once from the binary entry point, never at import time.
/// Returns the log file path so the caller can report where the full
/// record of the run lives.
pub fn init(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("nft_minting_{timestamp}.log"));
    let file = fs::File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stdout))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| MintError::Logging(e.to_string()))?;

    Ok(path)
}
