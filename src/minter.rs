use std::path::Path;

use tracing::info;

use crate::client::ChainClient;
use crate::config::{MintConfig, NftSection};
use crate::crypto::hash::sha256_file;
use crate::error::{MintError, Result};
use crate::registers::build_registers;
use crate::types::{BoxAsset, OutputRequest, TokenId, TransactionRequest};

pub const NANOERG_PER_ERG: u64 = 1_000_000_000;

/// Minimum value carried by the NFT box (0.005 ERG).
pub const MIN_BOX_VALUE: u64 = 5_000_000;

/// Fixed miner fee (0.001 ERG).
pub const TX_FEE: u64 = 1_000_000;

/// Asset type register value for picture NFTs.
pub const NFT_TYPE_TAG: i64 = 1;

/// Identifiers of a successfully broadcast mint. Nothing is produced for
/// a failed run; failure short-circuits before a result exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintResult {
    pub transaction_id: String,
    pub token_id: TokenId,
}

/// nanoERG a mint must be able to spend, identical for every invocation.
pub fn funding_requirement() -> u64 {
    MIN_BOX_VALUE + TX_FEE
}

/// Expands the base description with the fixed metadata trailer.
///
/// The field order and newline structure are load-bearing: the composed
/// string is stored on-chain and must reproduce byte-for-byte.
pub fn compose_description(nft: &NftSection) -> String {
    format!(
        "{}\n\nEdition: {}\nEvent: {}\nDate: {}\nCreator: {}\nProject: {}\nCollection: {}\nFamily: {}",
        nft.description,
        nft.edition,
        nft.event,
        nft.date,
        nft.creator,
        nft.project,
        nft.collection_name,
        nft.collection_family,
    )
}

/// Runs the full mint sequence against `client` and reports the resulting
/// identifiers.
///
/// Strictly sequential, no retries: select funding inputs, derive the
/// token id from the first input, hash the asset, build the metadata
/// registers, then let the node assemble, sign, and broadcast the
/// transaction. Any failure aborts the whole run.
pub async fn mint_nft<C: ChainClient>(
    config: &MintConfig,
    client: &C,
    asset: &Path,
) -> Result<MintResult> {
    let required = funding_requirement();
    info!(
        "total ERG needed: {:.9}",
        required as f64 / NANOERG_PER_ERG as f64
    );

    let inputs = client.select_inputs(&config.wallet.address, required).await?;
    let first = inputs.first().ok_or(MintError::InsufficientFunds {
        required,
        available: 0,
    })?;
    // Minting consumes the first input; its id becomes the token id.
    let token_id = TokenId::from(&first.box_id);
    info!(inputs = inputs.len(), "token id will be: {token_id}");

    let content_hash = sha256_file(asset)?;
    info!(asset = %asset.display(), "asset digest: {}", hex::encode(content_hash));

    let content_uri = config.ipfs.uri();
    info!("content URI: {content_uri}");

    let description = compose_description(&config.nft);
    let registers = build_registers(
        &config.nft.name,
        &description,
        config.nft.decimals,
        NFT_TYPE_TAG,
        content_hash,
        &content_uri,
    );
    info!("metadata registers built");

    let output = OutputRequest {
        address: config.wallet.address.clone(),
        value: MIN_BOX_VALUE,
        assets: vec![BoxAsset {
            token_id: token_id.clone(),
            amount: 1,
        }],
        registers: registers.to_node_map(),
    };

    let request = TransactionRequest {
        requests: vec![output],
        inputs: inputs.iter().map(|b| b.box_id.clone()).collect(),
        fee: TX_FEE,
        change_address: config.wallet.address.clone(),
    };

    info!("building unsigned transaction");
    let unsigned = client.build_unsigned_tx(&request).await?;

    info!("signing transaction with node wallet");
    let signed = client.sign(&unsigned).await?;

    info!("submitting transaction to the network");
    let transaction_id = client.submit(&signed).await?;

    info!("NFT minted");
    info!("transaction id: {transaction_id}");
    info!("token id: {token_id}");

    let explorer_base = config.explorer.url.replace("/api/v1", "");
    let explorer_base = explorer_base.trim_end_matches('/');
    info!("transaction explorer link: {explorer_base}/transactions/{transaction_id}");
    info!("token explorer link: {explorer_base}/tokens/{token_id}");

    Ok(MintResult {
        transaction_id,
        token_id,
    })
}
