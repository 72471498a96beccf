use std::collections::HashSet;

use corvid_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    collection::{Collection, Named},
    error::{ConfigError, EntityKind},
};

/// A network-specific address a contract is already deployed at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub network: String,
    pub address: Address,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aliases(Vec<Alias>);

impl From<Vec<Alias>> for Aliases {
    fn from(vec: Vec<Alias>) -> Self {
        Self(vec)
    }
}

impl Aliases {
    /// First alias pinned for `network`.
    pub fn by_network(&self, network: &str) -> Option<&Alias> {
        self.0.iter().find(|alias| alias.network == network)
    }

    /// Pins `alias.address` for `alias.network`, replacing an existing pin for that network.
    pub fn add_or_update(&mut self, alias: Alias) {
        match self.0.iter_mut().find(|a| a.network == alias.network) {
            Some(existing) => *existing = alias,
            None => self.0.push(alias),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alias> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A contract source known to the project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Aliases::is_empty")]
    pub aliases: Aliases,
}

impl Contract {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            aliases: Aliases::default(),
        }
    }

    pub fn with_alias(mut self, network: impl Into<String>, address: Address) -> Self {
        self.aliases.add_or_update(Alias {
            network: network.into(),
            address,
        });
        self
    }

    /// True if any alias exists, whichever networks it covers.
    pub fn is_aliased(&self) -> bool {
        !self.aliases.is_empty()
    }
}

impl Named for Contract {
    const KIND: EntityKind = EntityKind::Contract;

    fn name(&self) -> &str {
        &self.name
    }
}

/// Returns the address `contract` is pinned to on `network`, if any.
///
/// An unaliased contract is not an error: the caller deploys or resolves it another way.
pub fn resolve(contract: &Contract, network: &str) -> Option<Address> {
    contract.aliases.by_network(network).map(|alias| alias.address)
}

pub type Contracts = Collection<Contract>;

impl Contracts {
    /// Looks up `name` and resolves its alias for `network`.
    pub fn resolve_address(&self, name: &str, network: &str) -> Result<Option<Address>, ConfigError> {
        Ok(resolve(self.by_name(name)?, network))
    }

    /// Rejects unnamed or duplicated contracts and contracts that pin a network twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_names()?;

        for contract in self.iter() {
            let mut networks = HashSet::new();
            for alias in contract.aliases.iter() {
                if !networks.insert(alias.network.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "contract {} has more than one alias for network {}",
                        contract.name, alias.network
                    )));
                }
            }
        }

        Ok(())
    }
}
