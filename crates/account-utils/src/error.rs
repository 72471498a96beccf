use crate::SignatureAlgorithm;

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The algorithm string is not one of the supported signature algorithms.
    #[error("invalid signature algorithm: {0}")]
    InvalidSignatureAlgorithm(String),
    /// The algorithm string is not one of the supported hash algorithms.
    #[error("invalid hash algorithm: {0}")]
    InvalidHashAlgorithm(String),
    #[error("failed decoding public key: {key} with error: {reason}")]
    InvalidPublicKey { key: String, reason: String },
    #[error("failed decoding private key: {0}")]
    InvalidPrivateKey(String),
    /// The generator cannot produce keys for this algorithm.
    #[error("key generation is not supported for {0}")]
    UnsupportedAlgorithm(SignatureAlgorithm),
    #[error("key weight {0} exceeds the full signing weight")]
    InvalidWeight(u32),
}
