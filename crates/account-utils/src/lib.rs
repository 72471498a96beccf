use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

pub mod algorithms;
pub mod error;
pub mod generate;
pub mod keys;

pub use self::algorithms::{HashAlgorithm, SignatureAlgorithm};
pub use self::error::KeyError;
pub use self::generate::{KeyGenerator, KeyPair, Secp256k1Generator};
pub use self::keys::{parse_private_key, AccountKey, PublicKey, FULL_WEIGHT};

/// Provides a new-type wrapper around `String` that is zeroized on `Drop`.
///
/// Useful for ensuring that private key memory is zeroed-out on drop.
#[derive(Clone, PartialEq, Serialize, Deserialize, Zeroize)]
#[zeroize(drop)]
#[serde(transparent)]
pub struct ZeroizeString(String);

impl From<String> for ZeroizeString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl ZeroizeString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for ZeroizeString {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ZeroizeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ZeroizeString(<redacted>)")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug_never_prints_secret() {
        let secret = ZeroizeString::from("deadbeef".to_string());
        assert!(!format!("{secret:?}").contains("deadbeef"));
    }
}
