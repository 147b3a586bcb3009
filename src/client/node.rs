use serde::Deserialize;
use tracing::{debug, info};

use crate::client::rest::RestTransport;
use crate::client::ChainClient;
use crate::config::{Network, NodeSection};
use crate::error::{MintError, Result};
use crate::types::{InputBox, SignedTransaction, TransactionRequest, UnsignedTransaction};

/// Subset of the node info document the workflow cares about.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub name: String,
    #[serde(default)]
    pub full_height: Option<u64>,
}

/// Client for an Ergo node with an unlocked wallet.
///
/// Implements [`ChainClient`]; the wallet and its keys live entirely on
/// the node side.
#[derive(Clone)]
pub struct NodeClient {
    transport: RestTransport,
    network: Network,
}

impl NodeClient {
    /// Connects to the node and verifies it is reachable before any
    /// funds move. Connectivity failure here is fatal; there is no retry.
    pub async fn connect(node: &NodeSection) -> Result<Self> {
        let transport = RestTransport::new(node.url.clone(), node.api_key.clone())?;
        let client = Self {
            transport,
            network: node.network,
        };
        let node_info = client.info().await?;
        info!(
            node = %node_info.name,
            height = ?node_info.full_height,
            network = %client.network,
            "connected to node"
        );
        Ok(client)
    }

    pub async fn info(&self) -> Result<NodeInfo> {
        let value = self.transport.get("/info").await?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

/// Deterministic funding selection: highest value first, box id as the
/// tiebreak, accumulating until `target` is covered. The first selected
/// box is the one the mint consumes for the token id, so the ordering
/// here fixes token-id derivation.
pub fn select_boxes(mut candidates: Vec<InputBox>, target: u64) -> Result<Vec<InputBox>> {
    candidates.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.box_id.cmp(&b.box_id))
    });

    let mut selected = Vec::new();
    let mut total = 0u64;
    for candidate in candidates {
        total = total.saturating_add(candidate.value);
        selected.push(candidate);
        if total >= target {
            return Ok(selected);
        }
    }

    Err(MintError::InsufficientFunds {
        required: target,
        available: total,
    })
}

impl ChainClient for NodeClient {
    async fn select_inputs(&self, address: &str, target: u64) -> Result<Vec<InputBox>> {
        let value = self
            .transport
            .get(&format!("/blockchain/box/unspent/byAddress/{address}"))
            .await?;
        let candidates: Vec<InputBox> = serde_json::from_value(value)?;
        debug!(count = candidates.len(), "fetched unspent boxes");
        select_boxes(candidates, target)
    }

    async fn build_unsigned_tx(&self, request: &TransactionRequest) -> Result<UnsignedTransaction> {
        let value = self
            .transport
            .post("/wallet/transaction/generateUnsigned", request)
            .await?;
        Ok(UnsignedTransaction(value))
    }

    async fn sign(&self, tx: &UnsignedTransaction) -> Result<SignedTransaction> {
        let body = serde_json::json!({ "tx": tx });
        let value = self
            .transport
            .post("/wallet/transaction/sign", &body)
            .await?;
        Ok(SignedTransaction(value))
    }

    async fn submit(&self, tx: &SignedTransaction) -> Result<String> {
        let value = self.transport.post("/transactions", tx).await?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| MintError::Response(format!("expected transaction id, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoxId;

    fn boxed(marker: u8, value: u64) -> InputBox {
        InputBox {
            box_id: BoxId::new([marker; 32]),
            value,
        }
    }

    #[test]
    fn selection_prefers_larger_boxes() {
        let selected = select_boxes(vec![boxed(1, 100), boxed(2, 900)], 500).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].box_id, BoxId::new([2; 32]));
    }

    #[test]
    fn selection_order_is_deterministic_under_value_ties() {
        let forward = select_boxes(vec![boxed(9, 100), boxed(3, 100)], 150).unwrap();
        let reverse = select_boxes(vec![boxed(3, 100), boxed(9, 100)], 150).unwrap();
        assert_eq!(forward[0].box_id, reverse[0].box_id);
        assert_eq!(forward[0].box_id, BoxId::new([3; 32]));
    }

    #[test]
    fn selection_accumulates_until_target_covered() {
        let selected = select_boxes(vec![boxed(1, 400), boxed(2, 300), boxed(3, 200)], 600).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].value, 400);
        assert_eq!(selected[1].value, 300);
    }

    #[test]
    fn insufficient_total_reports_both_amounts() {
        let err = select_boxes(vec![boxed(1, 100), boxed(2, 50)], 6_000_000).unwrap_err();
        match err {
            MintError::InsufficientFunds {
                required,
                available,
            } => {
                assert_eq!(required, 6_000_000);
                assert_eq!(available, 150);
            }
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
    }

    #[test]
    fn empty_wallet_is_insufficient() {
        assert!(matches!(
            select_boxes(Vec::new(), 1).unwrap_err(),
            MintError::InsufficientFunds { available: 0, .. }
        ));
    }
}
