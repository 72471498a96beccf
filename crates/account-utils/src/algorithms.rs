use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::KeyError;

/// Signature algorithms an account key can be registered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum SignatureAlgorithm {
    #[strum(serialize = "ECDSA_P256")]
    #[serde(rename = "ECDSA_P256")]
    EcdsaP256,
    #[strum(serialize = "ECDSA_secp256k1")]
    #[serde(rename = "ECDSA_secp256k1")]
    EcdsaSecp256k1,
}

impl SignatureAlgorithm {
    /// Numeric identifier used on chain.
    pub fn code(&self) -> u8 {
        match self {
            SignatureAlgorithm::EcdsaP256 => 2,
            SignatureAlgorithm::EcdsaSecp256k1 => 3,
        }
    }

    /// Parses a user supplied algorithm name.
    pub fn parse(value: &str) -> Result<Self, KeyError> {
        value
            .trim()
            .parse()
            .map_err(|_| KeyError::InvalidSignatureAlgorithm(value.to_string()))
    }
}

/// Hash algorithms an account key can be registered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum HashAlgorithm {
    #[strum(serialize = "SHA2_256")]
    #[serde(rename = "SHA2_256")]
    Sha2_256,
    #[strum(serialize = "SHA3_256")]
    #[serde(rename = "SHA3_256")]
    Sha3_256,
}

impl HashAlgorithm {
    /// Numeric identifier used on chain.
    pub fn code(&self) -> u8 {
        match self {
            HashAlgorithm::Sha2_256 => 1,
            HashAlgorithm::Sha3_256 => 3,
        }
    }

    /// Parses a user supplied algorithm name.
    pub fn parse(value: &str) -> Result<Self, KeyError> {
        value
            .trim()
            .parse()
            .map_err(|_| KeyError::InvalidHashAlgorithm(value.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!(
            SignatureAlgorithm::parse("ECDSA_P256").unwrap(),
            SignatureAlgorithm::EcdsaP256
        );
        assert_eq!(
            SignatureAlgorithm::parse("ecdsa_secp256k1").unwrap(),
            SignatureAlgorithm::EcdsaSecp256k1
        );
        assert_eq!(HashAlgorithm::parse("SHA3_256").unwrap(), HashAlgorithm::Sha3_256);
        assert_eq!(HashAlgorithm::parse("sha2_256").unwrap(), HashAlgorithm::Sha2_256);
    }

    #[test]
    fn unknown_names_keep_the_input() {
        let err = SignatureAlgorithm::parse("RSA").unwrap_err();
        assert_eq!(err.to_string(), "invalid signature algorithm: RSA");

        let err = HashAlgorithm::parse("MD5").unwrap_err();
        assert_eq!(err.to_string(), "invalid hash algorithm: MD5");
    }

    #[test]
    fn display_matches_config_names() {
        assert_eq!(SignatureAlgorithm::EcdsaP256.to_string(), "ECDSA_P256");
        assert_eq!(HashAlgorithm::Sha3_256.to_string(), "SHA3_256");
        assert_eq!(
            serde_json::to_string(&SignatureAlgorithm::EcdsaSecp256k1).unwrap(),
            "\"ECDSA_secp256k1\""
        );
    }
}
