use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MintError, Result};
use crate::types::token::TokenId;

/// 32-byte box identifier, rendered as hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId([u8; 32]);

impl BoxId {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != 32 {
            return Err(MintError::InvalidParameter(format!(
                "box id must be 32 bytes, got {}",
                slice.len()
            )));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for BoxId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for BoxId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_string = String::deserialize(deserializer)?;
        let bytes = hex::decode(&hex_string).map_err(serde::de::Error::custom)?;
        BoxId::from_slice(&bytes).map_err(serde::de::Error::custom)
    }
}

/// An unspent box offered by the node as a funding input.
///
/// Only the fields the selection logic reads are modeled; the node keeps
/// the authoritative representation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBox {
    pub box_id: BoxId,
    /// nanoERG carried by the box.
    pub value: u64,
}

/// A token entry on a requested output box.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxAsset {
    pub token_id: TokenId,
    pub amount: u64,
}

/// One requested output of the unsigned transaction.
#[derive(Debug, Clone, Serialize)]
pub struct OutputRequest {
    pub address: String,
    /// nanoERG locked in the box.
    pub value: u64,
    pub assets: Vec<BoxAsset>,
    /// Hex-serialized register constants keyed `R4`..`R9`.
    pub registers: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_id_round_trips_through_hex_serde() {
        let id = BoxId::new([7u8; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "07".repeat(32)));
        let back: BoxId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn box_id_rejects_wrong_length() {
        assert!(BoxId::from_slice(&[0u8; 31]).is_err());
        assert!(serde_json::from_str::<BoxId>("\"abcd\"").is_err());
    }

    #[test]
    fn input_box_deserializes_from_node_json() {
        let json = format!(r#"{{"boxId": "{}", "value": 5000000}}"#, "11".repeat(32));
        let parsed: InputBox = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.value, 5_000_000);
        assert_eq!(parsed.box_id, BoxId::new([0x11; 32]));
    }
}
