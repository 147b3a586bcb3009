//! # Ergo NFT minter
//!
//! Mints a single non-fungible token on the Ergo blockchain through a
//! node-held wallet. The crate assembles the minting transaction (funding
//! inputs, the six metadata registers R4..R9, fee and change), delegates
//! signing and broadcast to the node, then reports the resulting
//! transaction and token identifiers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use ergo_nft_minter::client::NodeClient;
//! use ergo_nft_minter::config::MintConfig;
//! use ergo_nft_minter::minter::mint_nft;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load and validate the minting configuration
//!     let config = MintConfig::load(Path::new("config.json"))?;
//!
//!     // Connect to the node; the wallet and its keys stay on the node side
//!     let client = NodeClient::connect(&config.node).await?;
//!
//!     // Mint: one box, one token unit, six metadata registers
//!     let result = mint_nft(&config, &client, Path::new("asset.svg")).await?;
//!     println!("minted token {} in {}", result.token_id, result.transaction_id);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod minter;
pub mod registers;
pub mod types;

// Re-export commonly used items at crate root
pub use client::{ChainClient, NodeClient};
pub use config::MintConfig;
pub use error::{MintError, Result};
pub use minter::{mint_nft, MintResult, MIN_BOX_VALUE, TX_FEE};
pub use registers::{build_registers, NftRegisters, RegisterValue};
pub use types::TokenId;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
