use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a mint. There is no local recovery: every
/// variant propagates to the binary's outer boundary and ends the process.
#[derive(Debug, Error)]
pub enum MintError {
    #[error("configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("malformed configuration: {0}")]
    ConfigParse(String),

    #[error("missing or empty configuration field: {0}")]
    ConfigField(&'static str),

    #[error("asset file not found: {}", .path.display())]
    AssetNotFound { path: PathBuf },

    #[error("insufficient funds: {required} nanoERG required, {available} nanoERG spendable")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("node rejected request with status {status}: {message}")]
    Node { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected node response: {0}")]
    Response(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MintError>;
