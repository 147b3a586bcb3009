use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MintError, Result};

/// Full minting configuration, one JSON document with five sections.
///
/// Loading validates the document before anything touches the network:
/// the structure must parse, and every required string must be non-empty.
#[derive(Debug, Clone, Deserialize)]
pub struct MintConfig {
    pub node: NodeSection,
    pub explorer: ExplorerSection,
    pub wallet: WalletSection,
    pub nft: NftSection,
    pub ipfs: IpfsSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSection {
    pub url: String,
    pub api_key: String,
    pub network: Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerSection {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletSection {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftSection {
    pub name: String,
    pub description: String,
    pub decimals: u32,
    pub edition: String,
    pub event: String,
    pub date: String,
    pub creator: String,
    pub project: String,
    pub collection_name: String,
    pub collection_family: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpfsSection {
    pub hash: String,
    pub filename: String,
}

impl IpfsSection {
    /// Content URI stored in R9. The asset itself is hosted externally;
    /// only this reference goes on-chain.
    pub fn uri(&self) -> String {
        format!("ipfs://{}/{}", self.hash, self.filename)
    }
}

impl MintConfig {
    /// Reads and validates the configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MintError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => MintError::Io(e),
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates a configuration document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: MintConfig =
            serde_json::from_str(raw).map_err(|e| MintError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects the first empty required field, named as `section.field`.
    pub fn validate(&self) -> Result<()> {
        let required: [(&'static str, &str); 15] = [
            ("node.url", &self.node.url),
            ("node.apiKey", &self.node.api_key),
            ("explorer.url", &self.explorer.url),
            ("wallet.address", &self.wallet.address),
            ("nft.name", &self.nft.name),
            ("nft.description", &self.nft.description),
            ("nft.edition", &self.nft.edition),
            ("nft.event", &self.nft.event),
            ("nft.date", &self.nft.date),
            ("nft.creator", &self.nft.creator),
            ("nft.project", &self.nft.project),
            ("nft.collectionName", &self.nft.collection_name),
            ("nft.collectionFamily", &self.nft.collection_family),
            ("ipfs.hash", &self.ipfs.hash),
            ("ipfs.filename", &self.ipfs.filename),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(MintError::ConfigField(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "node": {
                "url": "http://127.0.0.1:9053",
                "apiKey": "hello",
                "network": "mainnet"
            },
            "explorer": { "url": "https://api.ergoplatform.com/api/v1" },
            "wallet": { "address": "9f4QF8AD1nQ3nJahQVkMj8hFSVVzVom77b52JU7EW71Zexg6N8v" },
            "nft": {
                "name": "Test NFT",
                "description": "A test piece",
                "decimals": 0,
                "edition": "1/1",
                "event": "Launch",
                "date": "2024-01-01",
                "creator": "alice",
                "project": "demo",
                "collectionName": "Demos",
                "collectionFamily": "Genesis"
            },
            "ipfs": { "hash": "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG", "filename": "asset.svg" }
        })
    }

    #[test]
    fn valid_config_parses() {
        let config = MintConfig::from_json(&sample().to_string()).unwrap();
        assert_eq!(config.node.network, Network::Mainnet);
        assert_eq!(config.nft.decimals, 0);
        assert_eq!(config.nft.collection_family, "Genesis");
    }

    #[test]
    fn missing_field_is_a_parse_error_naming_the_field() {
        let mut doc = sample();
        doc["node"].as_object_mut().unwrap().remove("apiKey");
        let err = MintConfig::from_json(&doc.to_string()).unwrap_err();
        match err {
            MintError::ConfigParse(msg) => assert!(msg.contains("apiKey"), "{msg}"),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn missing_section_is_a_parse_error() {
        let mut doc = sample();
        doc.as_object_mut().unwrap().remove("ipfs");
        let err = MintConfig::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, MintError::ConfigParse(_)));
    }

    #[test]
    fn empty_field_is_rejected_by_name() {
        let mut doc = sample();
        doc["node"]["url"] = serde_json::json!("");
        let err = MintConfig::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, MintError::ConfigField("node.url")));
    }

    #[test]
    fn empty_nested_field_is_rejected_by_name() {
        let mut doc = sample();
        doc["nft"]["collectionFamily"] = serde_json::json!("   ");
        let err = MintConfig::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, MintError::ConfigField("nft.collectionFamily")));
    }

    #[test]
    fn unknown_network_is_rejected() {
        let mut doc = sample();
        doc["node"]["network"] = serde_json::json!("devnet");
        assert!(MintConfig::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn ipfs_uri_joins_hash_and_filename() {
        let config = MintConfig::from_json(&sample().to_string()).unwrap();
        assert_eq!(
            config.ipfs.uri(),
            "ipfs://QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG/asset.svg"
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = MintConfig::load(Path::new("definitely-not-here.json")).unwrap_err();
        assert!(matches!(err, MintError::ConfigNotFound { .. }));
    }
}
