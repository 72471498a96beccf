use std::path::{Path, PathBuf};

use corvid_primitives::{consts::private_config_filename, fs::append_line};
use tracing::{debug, info, warn};

use crate::{
    account::{validate_account_name, Account},
    error::ConfigError,
    network::ChainNetwork,
    rw::ReaderWriter,
    state::State,
};

/// Asks whether a private configuration file should be added to the ignore file.
pub trait ConfirmIgnore {
    fn confirm_ignore(&self, file_name: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmIgnore for F {
    fn confirm_ignore(&self, file_name: &str) -> bool {
        self(file_name)
    }
}

/// Where a persisted account ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The account, secret included, was written to the shared document.
    Shared,
    /// The secret lives in `path` and the shared document references `file_name`.
    Private {
        file_name: String,
        path: PathBuf,
        ignored: bool,
    },
}

/// Saves newly created accounts so that secrets of public networks never land in the
/// shared configuration.
#[derive(Clone, Debug)]
pub struct AccountPersister {
    ignore_file: PathBuf,
}

impl AccountPersister {
    pub fn new(ignore_file: impl Into<PathBuf>) -> Self {
        Self {
            ignore_file: ignore_file.into(),
        }
    }

    pub fn ignore_file(&self) -> &Path {
        &self.ignore_file
    }

    /// Persists `account` for `network`.
    ///
    /// Emulator accounts are stored inline in the shared document. Any other network gets
    /// a private document next to the shared one, written before the shared document is
    /// touched, and the shared document only receives a reference to it.
    ///
    /// Once the private document is written the reference is always saved. A failure to
    /// update the ignore file is returned after that save.
    pub fn persist<RW: ReaderWriter + Clone>(
        &self,
        state: &mut State<RW>,
        account: Account,
        network: &ChainNetwork,
        confirm: &dyn ConfirmIgnore,
    ) -> Result<PersistOutcome, ConfigError> {
        validate_account_name(&account.name)?;
        if account.private_key().is_none() {
            return Err(ConfigError::Validation(format!(
                "account {} has no private key to persist",
                account.name
            )));
        }

        if network.is_local() {
            debug!(target: "corvid::config::persist", name = %account.name, "storing account in shared configuration");
            save_with_rollback(state, account)?;
            return Ok(PersistOutcome::Shared);
        }

        let file_name = private_config_filename(&account.name);
        let private_path = state.private_path(Path::new(&file_name));

        let mut private = State::empty(state.rw().clone(), &private_path);
        private.accounts_mut().add_or_update(account.clone());
        private.save_default()?;
        info!(target: "corvid::config::persist", path = ?private_path, "wrote private account configuration");

        let ignored = confirm.confirm_ignore(&file_name);
        let ignore_result = if ignored {
            self.add_to_ignore_file(&file_name)
        } else {
            Ok(())
        };
        if let Err(err) = &ignore_result {
            warn!(target: "corvid::config::persist", %err, "ignore file not updated, saving reference anyway");
        }

        save_with_rollback(state, Account::file_reference(&account.name, &file_name))?;
        ignore_result?;

        Ok(PersistOutcome::Private {
            file_name,
            path: private_path,
            ignored,
        })
    }

    /// Appends `file_name` on a new line. Existing entries are not checked.
    pub fn add_to_ignore_file(&self, file_name: &str) -> Result<(), ConfigError> {
        append_line(&self.ignore_file, file_name).map_err(|source| ConfigError::IgnoreFile {
            path: self.ignore_file.clone(),
            file_name: file_name.to_string(),
            source,
        })?;
        debug!(target: "corvid::config::persist", file_name, ignore_file = ?self.ignore_file, "added to ignore file");
        Ok(())
    }
}

impl Default for AccountPersister {
    fn default() -> Self {
        Self::new(corvid_primitives::consts::DEFAULT_IGNORE_FILENAME)
    }
}

/// Upserts `account` and saves, restoring the previous in-memory entry if the save fails.
fn save_with_rollback<RW: ReaderWriter + Clone>(
    state: &mut State<RW>,
    account: Account,
) -> Result<(), ConfigError> {
    let name = account.name.clone();
    let previous = state.accounts().by_name(&name).ok().cloned();
    state.accounts_mut().add_or_update(account);

    if let Err(err) = state.save_default() {
        warn!(target: "corvid::config::persist", %name, "saving shared configuration failed, reverting");
        match previous {
            Some(previous) => state.accounts_mut().add_or_update(previous),
            None => {
                let _ = state.accounts_mut().remove(&name);
            }
        }
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{account::AccountSource, memory::MemoryReaderWriter};
    use account_utils::ZeroizeString;
    use corvid_primitives::alloy_primitives::address;
    use std::fs;

    fn alice() -> Account {
        Account::inline(
            "alice",
            address!("01cf0e2f2f715450000000000000000000000000"),
            Vec::new(),
            ZeroizeString::from("33".repeat(32)),
        )
    }

    fn setup() -> (tempfile::TempDir, MemoryReaderWriter, State<MemoryReaderWriter>, AccountPersister) {
        let dir = tempfile::tempdir().unwrap();
        let rw = MemoryReaderWriter::new();
        let state = State::init(rw.clone(), "project/corvid.json");
        let persister = AccountPersister::new(dir.path().join(".gitignore"));
        (dir, rw, state, persister)
    }

    #[test]
    fn emulator_account_is_stored_inline() {
        let (_dir, rw, mut state, persister) = setup();
        let outcome = persister
            .persist(&mut state, alice(), &ChainNetwork::Emulator, &|_: &str| true)
            .unwrap();

        assert_eq!(outcome, PersistOutcome::Shared);
        assert!(!rw.exists(Path::new("project/alice.private.json")));
        assert!(!persister.ignore_file().exists());

        let saved = State::load(rw, "project/corvid.json").unwrap();
        assert_eq!(saved.accounts().by_name("alice").unwrap(), &alice());
    }

    #[test]
    fn remote_account_goes_to_private_file() {
        let (_dir, rw, mut state, persister) = setup();
        let outcome = persister
            .persist(&mut state, alice(), &ChainNetwork::Testnet, &|_: &str| true)
            .unwrap();

        assert_eq!(
            outcome,
            PersistOutcome::Private {
                file_name: "alice.private.json".to_string(),
                path: PathBuf::from("project/alice.private.json"),
                ignored: true,
            }
        );

        let private = State::load(rw.clone(), "project/alice.private.json").unwrap();
        assert_eq!(private.accounts().len(), 1);
        assert_eq!(private.accounts().by_name("alice").unwrap(), &alice());
        assert!(private.networks().is_empty());

        let shared = State::load(rw, "project/corvid.json").unwrap();
        let reference = shared.accounts().by_name("alice").unwrap();
        assert_eq!(
            reference.source,
            AccountSource::FileReference {
                location: PathBuf::from("alice.private.json")
            }
        );
        assert_eq!(shared.resolve_account("alice").unwrap(), alice());

        let ignore = fs::read_to_string(persister.ignore_file()).unwrap();
        assert_eq!(ignore, "\nalice.private.json");
    }

    #[test]
    fn declined_ignore_leaves_ignore_file_alone() {
        let (_dir, _rw, mut state, persister) = setup();
        let outcome = persister
            .persist(&mut state, alice(), &ChainNetwork::Mainnet, &|_: &str| false)
            .unwrap();

        assert!(matches!(outcome, PersistOutcome::Private { ignored: false, .. }));
        assert!(!persister.ignore_file().exists());
    }

    #[test]
    fn ignore_entries_are_not_deduplicated() {
        let (_dir, _rw, mut state, persister) = setup();
        fs::write(persister.ignore_file(), "target").unwrap();

        for _ in 0..2 {
            persister
                .persist(&mut state, alice(), &ChainNetwork::Testnet, &|_: &str| true)
                .unwrap();
        }

        let ignore = fs::read_to_string(persister.ignore_file()).unwrap();
        assert_eq!(ignore, "target\nalice.private.json\nalice.private.json");
        assert_eq!(state.accounts().len(), 1);
    }

    #[test]
    fn failed_private_write_leaves_no_orphan_reference() {
        let (_dir, rw, mut state, persister) = setup();
        rw.fail_writes_to("project/alice.private.json");

        let asked = std::cell::Cell::new(false);
        let confirm = |_: &str| {
            asked.set(true);
            true
        };
        let err = persister
            .persist(&mut state, alice(), &ChainNetwork::Testnet, &confirm)
            .unwrap_err();

        assert!(matches!(err, ConfigError::Write { .. }));
        assert!(!asked.get());
        assert!(!state.accounts().contains("alice"));
        assert!(!rw.exists(Path::new("project/corvid.json")));
        assert!(!persister.ignore_file().exists());
    }

    #[test]
    fn failed_ignore_append_still_saves_reference() {
        let (dir, rw, mut state, _) = setup();
        let persister = AccountPersister::new(dir.path().join("missing").join(".gitignore"));

        let err = persister
            .persist(&mut state, alice(), &ChainNetwork::Testnet, &|_: &str| true)
            .unwrap_err();

        assert!(matches!(err, ConfigError::IgnoreFile { .. }));
        assert!(rw.exists(Path::new("project/alice.private.json")));

        let shared = State::load(rw, "project/corvid.json").unwrap();
        assert!(shared.accounts().by_name("alice").unwrap().is_file_reference());
        assert_eq!(shared.resolve_account("alice").unwrap(), alice());
    }

    #[test]
    fn name_with_path_components_writes_nothing() {
        let (_dir, rw, mut state, persister) = setup();
        let account = Account::inline(
            "../../etc/x",
            address!("01cf0e2f2f715450000000000000000000000000"),
            Vec::new(),
            ZeroizeString::from("33".repeat(32)),
        );

        let err = persister
            .persist(&mut state, account, &ChainNetwork::Testnet, &|_: &str| true)
            .unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(!rw.exists(Path::new("project/../../etc/x.private.json")));
        assert!(!rw.exists(Path::new("project/corvid.json")));
        assert!(!persister.ignore_file().exists());
        assert!(state.accounts().names().all(|name| name != "../../etc/x"));
    }

    #[test]
    fn failed_shared_save_restores_previous_entry() {
        let (_dir, rw, mut state, persister) = setup();
        let previous = Account::file_reference("alice", "old.private.json");
        state.accounts_mut().add_or_update(previous.clone());
        rw.fail_writes_to("project/corvid.json");

        let err = persister
            .persist(&mut state, alice(), &ChainNetwork::Emulator, &|_: &str| true)
            .unwrap_err();

        assert!(matches!(err, ConfigError::Write { .. }));
        assert_eq!(state.accounts().by_name("alice").unwrap(), &previous);
    }

    #[test]
    fn account_without_secret_is_rejected() {
        let (_dir, rw, mut state, persister) = setup();
        let err = persister
            .persist(
                &mut state,
                Account::file_reference("alice", "alice.private.json"),
                &ChainNetwork::Testnet,
                &|_: &str| true,
            )
            .unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(!rw.exists(Path::new("project/alice.private.json")));
    }
}
