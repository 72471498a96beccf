use crate::{error::KeyError, keys::PublicKey, SignatureAlgorithm, ZeroizeString};

/// A freshly generated key pair. The private half is zeroized on drop.
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: ZeroizeString,
}

impl KeyPair {
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.public_key.algorithm()
    }
}

/// Capability for producing new account keys.
pub trait KeyGenerator: Send + Sync {
    fn generate(&self, algorithm: SignatureAlgorithm) -> Result<KeyPair, KeyError>;
}

/// Generates `ECDSA_secp256k1` keys from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1Generator;

impl KeyGenerator for Secp256k1Generator {
    fn generate(&self, algorithm: SignatureAlgorithm) -> Result<KeyPair, KeyError> {
        if algorithm != SignatureAlgorithm::EcdsaSecp256k1 {
            return Err(KeyError::UnsupportedAlgorithm(algorithm));
        }

        let (secret_key, public_key) = secp256k1::generate_keypair(&mut rand::thread_rng());

        // drop the 0x04 SEC1 prefix
        let raw = public_key.serialize_uncompressed()[1..].to_vec();

        Ok(KeyPair {
            public_key: PublicKey::from_raw(algorithm, raw),
            private_key: hex::encode(secret_key.secret_bytes()).into(),
        })
    }
}
