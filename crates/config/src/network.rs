use std::fmt;

use account_utils::{HashAlgorithm, PublicKey, FULL_WEIGHT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    collection::{Collection, Named},
    error::{ConfigError, EntityKind},
};

pub const EMULATOR_NETWORK: &str = "emulator";
pub const TESTNET_NETWORK: &str = "testnet";
pub const MAINNET_NETWORK: &str = "mainnet";

const EMULATOR_HOST: &str = "http://127.0.0.1:8888";
const TESTNET_HOST: &str = "https://rest-testnet.onflow.org";
const MAINNET_HOST: &str = "https://rest-mainnet.onflow.org";

const TESTNET_FAUCET_URL: &str = "https://testnet-faucet.onflow.org/";
const MAINNET_PORT_URL: &str = "https://port.onflow.org/transaction";
/// Hash of the account creation transaction template the mainnet port executes.
const MAINNET_CREATE_ACCOUNT_HASH: &str =
    "a0a78aa7821144efd5ebb974bb52ba04609ce76c3863af9d45348db93937cf98";

/// A network entry as persisted in the configuration document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub host: String,
}

impl Named for Network {
    const KIND: EntityKind = EntityKind::Network;

    fn name(&self) -> &str {
        &self.name
    }
}

pub type Networks = Collection<Network>;

/// The network an operation targets.
///
/// Decides where account creation is submitted and how the resulting secret is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainNetwork {
    Emulator,
    Testnet,
    Mainnet,
    Custom(Network),
}

impl ChainNetwork {
    /// The networks every new configuration is seeded with.
    pub fn defaults() -> [ChainNetwork; 3] {
        [ChainNetwork::Emulator, ChainNetwork::Testnet, ChainNetwork::Mainnet]
    }

    pub fn name(&self) -> &str {
        match self {
            ChainNetwork::Emulator => EMULATOR_NETWORK,
            ChainNetwork::Testnet => TESTNET_NETWORK,
            ChainNetwork::Mainnet => MAINNET_NETWORK,
            ChainNetwork::Custom(network) => &network.name,
        }
    }

    pub fn host(&self) -> &str {
        match self {
            ChainNetwork::Emulator => EMULATOR_HOST,
            ChainNetwork::Testnet => TESTNET_HOST,
            ChainNetwork::Mainnet => MAINNET_HOST,
            ChainNetwork::Custom(network) => &network.host,
        }
    }

    /// True for the local developer network, whose state resets on restart.
    pub fn is_local(&self) -> bool {
        matches!(self, ChainNetwork::Emulator)
    }

    /// Page of the external wallet that creates an account for `public_key`.
    ///
    /// `None` for networks without a browser flow (emulator and custom networks).
    pub fn wallet_url(&self, public_key: &PublicKey, hash_algo: HashAlgorithm) -> Option<Url> {
        match self {
            ChainNetwork::Testnet => Url::parse_with_params(
                TESTNET_FAUCET_URL,
                [
                    ("key", public_key.to_hex()),
                    ("source", "cli".to_string()),
                    ("sig-algo", public_key.algorithm().to_string()),
                ],
            )
            .ok(),
            ChainNetwork::Mainnet => Url::parse_with_params(
                MAINNET_PORT_URL,
                [
                    ("hash", MAINNET_CREATE_ACCOUNT_HASH.to_string()),
                    ("showcode", "false".to_string()),
                    ("weight", FULL_WEIGHT.to_string()),
                    ("halg", hash_algo.code().to_string()),
                    ("salg", public_key.algorithm().code().to_string()),
                    ("pk", public_key.to_hex()),
                ],
            )
            .ok(),
            ChainNetwork::Emulator | ChainNetwork::Custom(_) => None,
        }
    }

    pub fn to_config(&self) -> Network {
        Network {
            name: self.name().to_string(),
            host: self.host().to_string(),
        }
    }

    /// Maps a persisted network back to a variant; well-known names keep their fixed host.
    pub fn from_config(network: &Network) -> Self {
        match network.name.as_str() {
            EMULATOR_NETWORK => ChainNetwork::Emulator,
            TESTNET_NETWORK => ChainNetwork::Testnet,
            MAINNET_NETWORK => ChainNetwork::Mainnet,
            _ => ChainNetwork::Custom(network.clone()),
        }
    }

    /// Resolves `name` against the built-in networks, then the configured ones.
    pub fn by_name(networks: &Networks, name: &str) -> Result<Self, ConfigError> {
        match name {
            EMULATOR_NETWORK => Ok(ChainNetwork::Emulator),
            TESTNET_NETWORK => Ok(ChainNetwork::Testnet),
            MAINNET_NETWORK => Ok(ChainNetwork::Mainnet),
            _ => networks.by_name(name).map(ChainNetwork::from_config),
        }
    }
}

impl fmt::Display for ChainNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use account_utils::{KeyGenerator, Secp256k1Generator, SignatureAlgorithm};

    fn public_key() -> PublicKey {
        Secp256k1Generator
            .generate(SignatureAlgorithm::EcdsaSecp256k1)
            .unwrap()
            .public_key
    }

    #[test]
    fn wallet_urls_only_for_public_networks() {
        let key = public_key();

        let testnet = ChainNetwork::Testnet
            .wallet_url(&key, HashAlgorithm::Sha3_256)
            .unwrap();
        assert_eq!(testnet.host_str(), Some("testnet-faucet.onflow.org"));
        assert!(testnet.query().unwrap().contains(&key.to_hex()));

        let mainnet = ChainNetwork::Mainnet
            .wallet_url(&key, HashAlgorithm::Sha3_256)
            .unwrap();
        assert!(mainnet.query().unwrap().contains("halg=3"));

        assert!(ChainNetwork::Emulator
            .wallet_url(&key, HashAlgorithm::Sha3_256)
            .is_none());
    }

    #[test]
    fn resolves_custom_networks_from_config() {
        let networks: Networks = vec![Network {
            name: "previewnet".to_string(),
            host: "http://10.0.0.1:8888".to_string(),
        }]
        .into();

        let network = ChainNetwork::by_name(&networks, "previewnet").unwrap();
        assert_eq!(network.host(), "http://10.0.0.1:8888");
        assert!(!network.is_local());

        assert_eq!(
            ChainNetwork::by_name(&networks, "emulator").unwrap(),
            ChainNetwork::Emulator
        );
        assert!(ChainNetwork::by_name(&networks, "nope").unwrap_err().is_not_found());
    }

    #[test]
    fn config_roundtrip_keeps_well_known_variants() {
        for network in ChainNetwork::defaults() {
            assert_eq!(ChainNetwork::from_config(&network.to_config()), network);
        }
    }
}
