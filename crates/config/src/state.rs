use std::{
    fmt,
    path::{Path, PathBuf},
};

use corvid_primitives::{consts::EMULATOR_SERVICE_ACCOUNT, dirs::sibling_path};
use tracing::{debug, info};

use crate::{
    account::{Account, AccountSource, Accounts},
    contract::Contracts,
    deployment::Deployments,
    document::ConfigDocument,
    error::{ConfigError, EntityKind},
    network::{ChainNetwork, Networks},
    rw::{FileSystem, ReaderWriter},
};

/// A loaded configuration document bound to the path it is saved to by default.
///
/// Single owner per invocation. Mutations only reach disk through [`State::save`] or
/// [`State::save_default`].
pub struct State<RW = FileSystem> {
    rw: RW,
    path: PathBuf,
    document: ConfigDocument,
}

impl<RW> fmt::Debug for State<RW> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("path", &self.path)
            .field("document", &self.document)
            .finish()
    }
}

impl<RW: ReaderWriter + Clone> State<RW> {
    /// A new document seeded with the default networks. Nothing is written until saved.
    pub fn init(rw: RW, path: impl Into<PathBuf>) -> Self {
        Self {
            rw,
            path: path.into(),
            document: ConfigDocument::with_default_networks(),
        }
    }

    /// A document with no entries at all, used for private account files.
    pub fn empty(rw: RW, path: impl Into<PathBuf>) -> Self {
        Self {
            rw,
            path: path.into(),
            document: ConfigDocument::default(),
        }
    }

    pub fn load(rw: RW, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let bytes = rw.read(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let document = ConfigDocument::from_slice(&bytes, &path)?;
        debug!(
            target: "corvid::config",
            ?path,
            accounts = document.accounts.len(),
            contracts = document.contracts.len(),
            "loaded configuration"
        );

        Ok(Self { rw, path, document })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let bytes = self.document.to_vec()?;
        self.rw.write(path, &bytes).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(target: "corvid::config", ?path, "saved configuration");
        Ok(())
    }

    pub fn save_default(&self) -> Result<(), ConfigError> {
        self.save(&self.path)
    }

    /// Path of `location` relative to the directory holding this document.
    pub fn private_path(&self, location: &Path) -> PathBuf {
        sibling_path(&self.path, location)
    }

    /// Returns the account named `name` with its secret material.
    ///
    /// File references are followed to the private document they point at, which must
    /// define an inline account under the same name.
    pub fn resolve_account(&self, name: &str) -> Result<Account, ConfigError> {
        let account = self.document.accounts.by_name(name)?;
        let location = match &account.source {
            AccountSource::Inline { .. } => return Ok(account.clone()),
            AccountSource::FileReference { location } => location,
        };

        let private_path = self.private_path(location);
        debug!(target: "corvid::config", name, path = ?private_path, "following account reference");
        let private = State::load(self.rw.clone(), private_path)?;
        let resolved = private.document.accounts.by_name(name)?;
        if resolved.is_file_reference() {
            return Err(ConfigError::Validation(format!(
                "account {name} in {:?} must not reference another file",
                private.path
            )));
        }

        Ok(resolved.clone())
    }

    /// The account the local emulator signs account creations with.
    pub fn emulator_service_account(&self) -> Result<Account, ConfigError> {
        self.resolve_account(EMULATOR_SERVICE_ACCOUNT).map_err(|err| {
            if err.is_not_found() {
                ConfigError::not_found(EntityKind::Account, EMULATOR_SERVICE_ACCOUNT)
            } else {
                err
            }
        })
    }

    pub fn network(&self, name: &str) -> Result<ChainNetwork, ConfigError> {
        ChainNetwork::by_name(&self.document.networks, name)
    }
}

impl<RW> State<RW> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn contracts(&self) -> &Contracts {
        &self.document.contracts
    }

    pub fn contracts_mut(&mut self) -> &mut Contracts {
        &mut self.document.contracts
    }

    pub fn accounts(&self) -> &Accounts {
        &self.document.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut Accounts {
        &mut self.document.accounts
    }

    pub fn networks(&self) -> &Networks {
        &self.document.networks
    }

    pub fn deployments(&self) -> &Deployments {
        &self.document.deployments
    }

    pub fn deployments_mut(&mut self) -> &mut Deployments {
        &mut self.document.deployments
    }

    pub fn rw(&self) -> &RW {
        &self.rw
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memory::MemoryReaderWriter;
    use account_utils::ZeroizeString;
    use corvid_primitives::alloy_primitives::address;

    fn inline(name: &str) -> Account {
        Account::inline(
            name,
            address!("f8d6e0586b0a20c7000000000000000000000000"),
            Vec::new(),
            ZeroizeString::from("22".repeat(32)),
        )
    }

    #[test]
    fn save_then_load() {
        let rw = MemoryReaderWriter::new();
        let mut state = State::init(rw.clone(), "project/corvid.json");
        state.accounts_mut().add_or_update(inline("alice"));
        state.save_default().unwrap();

        let loaded = State::load(rw, "project/corvid.json").unwrap();
        assert_eq!(loaded.document(), state.document());
        assert_eq!(loaded.networks().len(), 3);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = State::load(MemoryReaderWriter::new(), "corvid.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn resolve_follows_file_reference() {
        let rw = MemoryReaderWriter::new();
        let mut private = State::empty(rw.clone(), "project/alice.private.json");
        private.accounts_mut().add_or_update(inline("alice"));
        private.save_default().unwrap();

        let mut state = State::init(rw, "project/corvid.json");
        state
            .accounts_mut()
            .add_or_update(Account::file_reference("alice", "alice.private.json"));

        let resolved = state.resolve_account("alice").unwrap();
        assert_eq!(resolved, inline("alice"));
    }

    #[test]
    fn resolve_reference_missing_in_private_document() {
        let rw = MemoryReaderWriter::new();
        let mut private = State::empty(rw.clone(), "alice.private.json");
        private.accounts_mut().add_or_update(inline("bob"));
        private.save_default().unwrap();

        let mut state = State::init(rw, "corvid.json");
        state
            .accounts_mut()
            .add_or_update(Account::file_reference("alice", "alice.private.json"));

        assert!(state.resolve_account("alice").unwrap_err().is_not_found());
    }

    #[test]
    fn emulator_service_account_lookup() {
        let mut state = State::init(MemoryReaderWriter::new(), "corvid.json");
        let err = state.emulator_service_account().unwrap_err();
        assert_eq!(
            err.to_string(),
            "account named emulator-account does not exist in configuration"
        );

        state
            .accounts_mut()
            .add_or_update(inline(EMULATOR_SERVICE_ACCOUNT));
        assert_eq!(
            state.emulator_service_account().unwrap().name,
            EMULATOR_SERVICE_ACCOUNT
        );
    }

    #[test]
    fn filesystem_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corvid.json");

        let mut state = State::init(FileSystem, &path);
        state.accounts_mut().add_or_update(inline("alice"));
        state.save_default().unwrap();

        let loaded = State::load(FileSystem, &path).unwrap();
        assert!(loaded.accounts().contains("alice"));
    }
}
