pub mod node;
pub mod rest;

// Re-export commonly used items
pub use node::{select_boxes, NodeClient, NodeInfo};
pub use rest::RestTransport;

use crate::error::Result;
use crate::types::{InputBox, SignedTransaction, TransactionRequest, UnsignedTransaction};

/// Capabilities the minting workflow needs from the chain backend.
///
/// [`NodeClient`] is the production implementation; tests substitute a
/// recording double.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Spendable inputs for `address` covering at least `target` nanoERG,
    /// in a deterministic order.
    async fn select_inputs(&self, address: &str, target: u64) -> Result<Vec<InputBox>>;

    /// Node-side assembly of the unsigned transaction.
    async fn build_unsigned_tx(&self, request: &TransactionRequest)
        -> Result<UnsignedTransaction>;

    /// Wallet signature by the node; no key material crosses this boundary.
    async fn sign(&self, tx: &UnsignedTransaction) -> Result<SignedTransaction>;

    /// Broadcast; returns the transaction id.
    async fn submit(&self, tx: &SignedTransaction) -> Result<String>;
}
