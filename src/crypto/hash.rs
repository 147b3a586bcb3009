use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{MintError, Result};

/// SHA-256 digest of a byte slice.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 digest of a whole file, read fully into memory.
///
/// This is the content hash stored in R8; the file itself never leaves
/// the machine.
pub fn sha256_file(path: &Path) -> Result<[u8; 32]> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MintError::AssetNotFound {
            path: path.to_path_buf(),
        },
        _ => MintError::Io(e),
    })?;
    Ok(sha256(&bytes))
}
