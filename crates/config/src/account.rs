use std::path::{Path, PathBuf};

use account_utils::{AccountKey, ZeroizeString};
use corvid_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    collection::{Collection, Named},
    error::{ConfigError, EntityKind},
};

/// Where the secret material of an account lives.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountSource {
    /// The private key is stored in the same document as the account.
    Inline { private_key: ZeroizeString },
    /// The account is defined in a separate private document at `location`.
    FileReference { location: PathBuf },
}

/// A local representation of an on-chain account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord", into = "AccountRecord")]
pub struct Account {
    pub name: String,
    pub address: Option<Address>,
    pub keys: Vec<AccountKey>,
    pub source: AccountSource,
}

impl Account {
    pub fn inline(
        name: impl Into<String>,
        address: Address,
        keys: Vec<AccountKey>,
        private_key: ZeroizeString,
    ) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
            keys,
            source: AccountSource::Inline { private_key },
        }
    }

    /// A record holding only a name and the path of the private document.
    pub fn file_reference(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            address: None,
            keys: Vec::new(),
            source: AccountSource::FileReference {
                location: location.into(),
            },
        }
    }

    pub fn private_key(&self) -> Option<&ZeroizeString> {
        match &self.source {
            AccountSource::Inline { private_key } => Some(private_key),
            AccountSource::FileReference { .. } => None,
        }
    }

    pub fn location(&self) -> Option<&Path> {
        match &self.source {
            AccountSource::Inline { .. } => None,
            AccountSource::FileReference { location } => Some(location),
        }
    }

    pub fn is_file_reference(&self) -> bool {
        matches!(self.source, AccountSource::FileReference { .. })
    }
}

impl Named for Account {
    const KIND: EntityKind = EntityKind::Account;

    fn name(&self) -> &str {
        &self.name
    }
}

pub type Accounts = Collection<Account>;

/// Rejects names that are empty or would escape the configuration directory once used
/// as a private file name.
pub fn validate_account_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::Validation("account name cannot be empty".to_string()));
    }
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(ConfigError::Validation(format!(
            "account name {name} must not contain path separators or `..`"
        )));
    }
    Ok(())
}

/// On-disk shape of an [`Account`].
#[derive(Serialize, Deserialize)]
struct AccountRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    keys: Vec<AccountKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    private_key: Option<ZeroizeString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<PathBuf>,
}

impl TryFrom<AccountRecord> for Account {
    type Error = String;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let AccountRecord {
            name,
            address,
            keys,
            private_key,
            location,
        } = record;

        let source = match (private_key, location) {
            (Some(private_key), None) => AccountSource::Inline { private_key },
            (None, Some(location)) => {
                if !keys.is_empty() {
                    return Err(format!(
                        "account {name} references {location:?} and must not define keys"
                    ));
                }
                AccountSource::FileReference { location }
            }
            (Some(_), Some(location)) => {
                return Err(format!(
                    "account {name} defines a private key and also references {location:?}"
                ))
            }
            (None, None) => {
                return Err(format!(
                    "account {name} must define either a private key or a location"
                ))
            }
        };

        Ok(Self {
            name,
            address,
            keys,
            source,
        })
    }
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        let (private_key, location) = match account.source {
            AccountSource::Inline { private_key } => (Some(private_key), None),
            AccountSource::FileReference { location } => (None, Some(location)),
        };

        Self {
            name: account.name,
            address: account.address,
            keys: account.keys,
            private_key,
            location,
        }
    }
}
