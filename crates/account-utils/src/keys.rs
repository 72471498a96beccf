use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::KeyError, HashAlgorithm, SignatureAlgorithm, ZeroizeString};

/// Weight a single key needs to authorize a transaction on its own.
pub const FULL_WEIGHT: u32 = 1000;

/// Length of a raw (uncompressed, prefix-less) public key for both supported curves.
pub const PUBLIC_KEY_LENGTH: usize = 64;

pub const PRIVATE_KEY_LENGTH: usize = 32;

/// A public key as registered on chain: the raw curve point without the SEC1 prefix byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    algorithm: SignatureAlgorithm,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Decodes a hex public key, with or without a `0x` prefix.
    pub fn decode_hex(algorithm: SignatureAlgorithm, value: &str) -> Result<Self, KeyError> {
        let invalid = |reason: String| KeyError::InvalidPublicKey {
            key: value.to_string(),
            reason,
        };

        let trimmed = strip_hex_prefix(value.trim());
        let bytes = hex::decode(trimmed).map_err(|e| invalid(e.to_string()))?;
        if bytes.len() != PUBLIC_KEY_LENGTH {
            return Err(invalid(format!(
                "expected {PUBLIC_KEY_LENGTH} bytes, got {}",
                bytes.len()
            )));
        }

        if algorithm == SignatureAlgorithm::EcdsaSecp256k1 {
            let mut sec1 = Vec::with_capacity(PUBLIC_KEY_LENGTH + 1);
            sec1.push(0x04);
            sec1.extend_from_slice(&bytes);
            secp256k1::PublicKey::from_slice(&sec1).map_err(|e| invalid(e.to_string()))?;
        }

        Ok(Self { algorithm, bytes })
    }

    pub(crate) fn from_raw(algorithm: SignatureAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex without a `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Compares against a hex string as found in chain events or configuration.
    ///
    /// Case and a leading `0x` are ignored.
    pub fn matches_hex(&self, other: &str) -> bool {
        strip_hex_prefix(other.trim()).eq_ignore_ascii_case(&self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, {})", self.algorithm, self)
    }
}

/// Describes one key attached to an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKey {
    #[serde(default)]
    pub index: u32,
    pub public_key: String,
    #[serde(rename = "signature_algorithm")]
    pub sig_algo: SignatureAlgorithm,
    #[serde(rename = "hash_algorithm")]
    pub hash_algo: HashAlgorithm,
    #[serde(default = "full_weight")]
    pub weight: u32,
}

fn full_weight() -> u32 {
    FULL_WEIGHT
}

impl AccountKey {
    pub fn new(
        index: u32,
        public_key: &PublicKey,
        hash_algo: HashAlgorithm,
        weight: u32,
    ) -> Result<Self, KeyError> {
        if weight > FULL_WEIGHT {
            return Err(KeyError::InvalidWeight(weight));
        }

        Ok(Self {
            index,
            public_key: public_key.to_hex(),
            sig_algo: public_key.algorithm(),
            hash_algo,
            weight,
        })
    }
}

/// Checks that `value` is a hex encoded 32 byte scalar and returns it without the `0x`
/// prefix.
pub fn parse_private_key(value: &str) -> Result<ZeroizeString, KeyError> {
    let trimmed = strip_hex_prefix(value.trim());
    let bytes = hex::decode(trimmed).map_err(|e| KeyError::InvalidPrivateKey(e.to_string()))?;
    if bytes.len() != PRIVATE_KEY_LENGTH {
        return Err(KeyError::InvalidPrivateKey(format!(
            "expected {PRIVATE_KEY_LENGTH} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(trimmed.to_lowercase().into())
}

pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
