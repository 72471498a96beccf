//! Project configuration: the shared document, private account documents and the rules
//! for persisting newly created accounts.

pub mod account;
pub mod collection;
pub mod contract;
pub mod deployment;
pub mod document;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod memory;
pub mod network;
pub mod persist;
pub mod rw;
pub mod state;

pub use self::account::{validate_account_name, Account, AccountSource, Accounts};
pub use self::collection::{Collection, Named};
pub use self::contract::{resolve, Alias, Aliases, Contract, Contracts};
pub use self::deployment::{Deployment, Deployments};
pub use self::document::ConfigDocument;
pub use self::error::{ConfigError, EntityKind};
pub use self::network::{ChainNetwork, Network, Networks};
pub use self::persist::{AccountPersister, ConfirmIgnore, PersistOutcome};
pub use self::rw::{FileSystem, ReaderWriter};
pub use self::state::State;
