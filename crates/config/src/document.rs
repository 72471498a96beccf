use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    account::Accounts, contract::Contracts, deployment::Deployments, error::ConfigError,
    network::{ChainNetwork, Networks},
};

/// Everything a single configuration file holds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub contracts: Contracts,
    #[serde(default)]
    pub networks: Networks,
    #[serde(default)]
    pub accounts: Accounts,
    #[serde(default)]
    pub deployments: Deployments,
}

impl ConfigDocument {
    /// A document seeded with the emulator, testnet and mainnet networks.
    pub fn with_default_networks() -> Self {
        Self {
            networks: ChainNetwork::defaults()
                .iter()
                .map(ChainNetwork::to_config)
                .collect(),
            ..Default::default()
        }
    }

    /// Parses and validates a document read from `path`.
    pub fn from_slice(bytes: &[u8], path: &Path) -> Result<Self, ConfigError> {
        let document: Self = serde_json::from_slice(bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        document.validate()?;
        Ok(document)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, ConfigError> {
        serde_json::to_vec_pretty(self).map_err(ConfigError::Encode)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.contracts.validate()?;
        self.networks.validate_names()?;
        self.accounts.validate_names()?;
        Ok(())
    }
}
