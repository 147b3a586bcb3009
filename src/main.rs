use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use ergo_nft_minter::client::NodeClient;
use ergo_nft_minter::config::MintConfig;
use ergo_nft_minter::minter::{self, mint_nft};
use ergo_nft_minter::{logging, MintError, Result};

/// Mint a single NFT on Ergo through a node-held wallet.
#[derive(Debug, Parser)]
#[command(name = "ergo-nft-minter", version, about)]
struct Args {
    /// Minting configuration file.
    #[arg(default_value = "config.json")]
    config: PathBuf,

    /// Asset whose SHA-256 digest is stored on-chain.
    #[arg(long, default_value = "asset.svg")]
    asset: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_path = match logging::init(Path::new("logs")) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("failed to set up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("NFT minting failed: {}", error_chain(&e));
            error!("full log: {}", log_path.display());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = MintConfig::load(&args.config)?;
    log_config(&config);

    let client = NodeClient::connect(&config.node).await?;
    let result = mint_nft(&config, &client, &args.asset).await?;

    info!(
        tx = %result.transaction_id,
        token = %result.token_id,
        "mint complete"
    );
    Ok(())
}

/// Configuration summary, logged before any network call.
fn log_config(config: &MintConfig) {
    info!("starting NFT minting process with configuration:");
    info!("network type: {}", config.node.network);
    info!("explorer URL: {}", config.explorer.url);
    info!("sender address: {}", config.wallet.address);
    info!("NFT name: {}", config.nft.name);
    info!("NFT description: {}", config.nft.description);
    info!("NFT edition: {}", config.nft.edition);
    info!("collection name: {}", config.nft.collection_name);
    info!("collection family: {}", config.nft.collection_family);
    info!("content URI: {}", config.ipfs.uri());
    info!(
        "minimum box value: {:.9} ERG",
        minter::MIN_BOX_VALUE as f64 / minter::NANOERG_PER_ERG as f64
    );
}

/// Error message plus its full source chain, one line.
fn error_chain(err: &MintError) -> String {
    use std::error::Error;

    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
