use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::boxes::{BoxId, OutputRequest};

/// Request body for node-side assembly of the unsigned transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Requested outputs; a mint has exactly one.
    pub requests: Vec<OutputRequest>,
    /// Funding inputs, spent in full.
    pub inputs: Vec<BoxId>,
    /// Fixed miner fee in nanoERG.
    pub fee: u64,
    /// Remainder of the inputs goes back to the sender.
    pub change_address: String,
}

/// Node-assembled transaction awaiting a wallet signature.
///
/// The payload is opaque to this crate: it travels from the node's
/// build endpoint to its sign endpoint unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnsignedTransaction(pub Value);

/// Wallet-signed transaction ready for broadcast. Opaque, like its
/// unsigned counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedTransaction(pub Value);
