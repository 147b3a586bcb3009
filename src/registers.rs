//! Metadata registers for a freshly minted token.
//!
//! A minted token describes itself through six additional registers on its
//! box, read positionally by indexers and wallets: R4 name, R5 description,
//! R6 decimals, R7 asset type, R8 content hash, R9 content URI. Values are
//! serialized constants (a type code followed by the value encoding), so
//! the bytes here must match what every other consumer of the chain
//! produces and expects.

use std::collections::BTreeMap;

/// Type code of a `Coll[Byte]` constant.
const TYPE_COLL_BYTE: u8 = 0x0e;

/// Type code of a 64-bit signed integer constant.
const TYPE_LONG: u8 = 0x05;

/// A typed constant destined for an output-box register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterValue {
    /// Raw byte collection. Strings are always stored as their UTF-8 bytes.
    Bytes(Vec<u8>),
    /// Signed 64-bit integer, zigzag + VLQ encoded on the wire.
    Long(i64),
}

impl RegisterValue {
    /// Byte collection holding the UTF-8 encoding of `s`.
    pub fn utf8(s: &str) -> Self {
        RegisterValue::Bytes(s.as_bytes().to_vec())
    }

    /// Serialized constant: type code followed by the value encoding.
    pub fn serialized(&self) -> Vec<u8> {
        match self {
            RegisterValue::Bytes(bytes) => {
                let mut out = Vec::with_capacity(bytes.len() + 6);
                out.push(TYPE_COLL_BYTE);
                write_vlq(&mut out, bytes.len() as u64);
                out.extend_from_slice(bytes);
                out
            }
            RegisterValue::Long(value) => {
                let mut out = vec![TYPE_LONG];
                write_vlq(&mut out, zigzag(*value));
                out
            }
        }
    }

    /// Hex rendering of the serialized constant, as the node request expects.
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialized())
    }
}

/// Unsigned VLQ: seven value bits per byte, high bit marks continuation.
fn write_vlq(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// ZigZag mapping of signed to unsigned so small magnitudes stay short.
fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// The six metadata registers of a minted token, in emission order R4..R9.
///
/// Immutable once built; a fresh set is constructed for every mint.
#[derive(Debug, Clone)]
pub struct NftRegisters([RegisterValue; 6]);

/// Builds the register set for one token.
///
/// Pure: encoding cannot fail for any input the signature admits.
pub fn build_registers(
    name: &str,
    description: &str,
    decimals: u32,
    type_tag: i64,
    content_hash: [u8; 32],
    content_uri: &str,
) -> NftRegisters {
    NftRegisters([
        RegisterValue::utf8(name),
        RegisterValue::utf8(description),
        RegisterValue::Long(i64::from(decimals)),
        RegisterValue::Long(type_tag),
        RegisterValue::Bytes(content_hash.to_vec()),
        RegisterValue::utf8(content_uri),
    ])
}

impl NftRegisters {
    /// The register values in positional order.
    pub fn values(&self) -> &[RegisterValue; 6] {
        &self.0
    }

    /// Hex-serialized registers keyed `R4`..`R9` for the node request.
    pub fn to_node_map(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, value)| (format!("R{}", i + 4), value.to_hex()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Inverse of `RegisterValue::serialized`, enough to check round-trips.
    fn decode(bytes: &[u8]) -> RegisterValue {
        fn read_vlq(bytes: &[u8]) -> (u64, usize) {
            let mut value = 0u64;
            let mut shift = 0;
            for (i, byte) in bytes.iter().enumerate() {
                value |= u64::from(byte & 0x7f) << shift;
                if byte & 0x80 == 0 {
                    return (value, i + 1);
                }
                shift += 7;
            }
            panic!("truncated VLQ");
        }

        match bytes[0] {
            TYPE_COLL_BYTE => {
                let (len, consumed) = read_vlq(&bytes[1..]);
                let start = 1 + consumed;
                RegisterValue::Bytes(bytes[start..start + len as usize].to_vec())
            }
            TYPE_LONG => {
                let (raw, _) = read_vlq(&bytes[1..]);
                let value = ((raw >> 1) as i64) ^ -((raw & 1) as i64);
                RegisterValue::Long(value)
            }
            other => panic!("unexpected type code {other:#x}"),
        }
    }

    fn sample() -> NftRegisters {
        build_registers("Test NFT", "desc", 0, 1, [0xab; 32], "ipfs://Qm/x.svg")
    }

    #[test]
    fn exactly_six_registers_in_fixed_order() {
        let map = sample().to_node_map();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["R4", "R5", "R6", "R7", "R8", "R9"]);
    }

    #[test]
    fn long_serialization_matches_known_vectors() {
        assert_eq!(RegisterValue::Long(0).to_hex(), "0500");
        assert_eq!(RegisterValue::Long(1).to_hex(), "0502");
        assert_eq!(RegisterValue::Long(-1).to_hex(), "0501");
        assert_eq!(RegisterValue::Long(3).to_hex(), "0506");
        assert_eq!(RegisterValue::Long(1000).to_hex(), "05d00f");
    }

    #[test]
    fn byte_collection_matches_known_vector() {
        assert_eq!(RegisterValue::utf8("test").to_hex(), "0e0474657374");
    }

    #[test]
    fn string_registers_round_trip_through_utf8() {
        let name = "Tëst NFT №42";
        let value = RegisterValue::utf8(name);
        match decode(&value.serialized()) {
            RegisterValue::Bytes(bytes) => assert_eq!(String::from_utf8(bytes).unwrap(), name),
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[test]
    fn decimals_and_type_tag_decode_to_expected_integers() {
        let registers = sample();
        assert_eq!(
            decode(&registers.values()[2].serialized()),
            RegisterValue::Long(0)
        );
        assert_eq!(
            decode(&registers.values()[3].serialized()),
            RegisterValue::Long(1)
        );
    }

    #[test]
    fn content_hash_register_is_a_32_byte_collection() {
        let registers = sample();
        let serialized = registers.values()[4].serialized();
        // type code, single-byte length 0x20, then the digest
        assert_eq!(serialized.len(), 2 + 32);
        assert_eq!(serialized[0], TYPE_COLL_BYTE);
        assert_eq!(serialized[1], 0x20);
    }

    #[test]
    fn long_values_round_trip() {
        for value in [0i64, 1, -1, 127, 128, -500, i64::MAX, i64::MIN] {
            let encoded = RegisterValue::Long(value).serialized();
            assert_eq!(decode(&encoded), RegisterValue::Long(value), "{value}");
        }
    }
}
