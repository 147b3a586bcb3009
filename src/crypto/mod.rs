pub mod hash;

pub use hash::{sha256, sha256_file};
