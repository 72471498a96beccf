use std::sync::Arc;

use account_utils::{
    AccountKey, HashAlgorithm, KeyGenerator, KeyPair, SignatureAlgorithm, FULL_WEIGHT,
};
use colored::Colorize;
use corvid_config::{
    validate_account_name, Account, AccountPersister, ChainNetwork, PersistOutcome,
    ReaderWriter, State,
};
use corvid_gateway::{ConfirmationPoller, Gateway, GatewayFactory, OnChainAccount, PollOptions};
use corvid_primitives::Address;
use tracing::{debug, info};
use url::Url;

use super::error::CreateError;

/// Questions asked while creating an account.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    fn select_network(&self, networks: &[ChainNetwork]) -> Result<ChainNetwork, CreateError>;

    /// Local name for the new account. `existing` holds names already in use.
    fn account_name(&self, existing: &[String]) -> Result<String, CreateError>;

    fn confirm_ignore(&self, file_name: &str) -> bool;
}

/// Sends the user to the external wallet that creates the account.
#[cfg_attr(test, mockall::automock)]
pub trait WalletLauncher: Send + Sync {
    fn open(&self, url: &Url) -> Result<(), CreateError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractiveOptions {
    pub sig_algo: SignatureAlgorithm,
    pub hash_algo: HashAlgorithm,
    pub poll: PollOptions,
}

impl Default for InteractiveOptions {
    fn default() -> Self {
        Self {
            sig_algo: SignatureAlgorithm::EcdsaSecp256k1,
            hash_algo: HashAlgorithm::Sha3_256,
            poll: PollOptions::default(),
        }
    }
}

/// Result of a completed interactive creation.
#[derive(Debug)]
pub struct CreatedAccount {
    pub name: String,
    pub network: ChainNetwork,
    pub account: OnChainAccount,
    pub outcome: PersistOutcome,
}

/// Walks a user through generating keys, creating the account on the chosen network and
/// saving it under a name of their choice.
pub struct InteractiveCreator<P, L, K, F> {
    prompter: P,
    launcher: L,
    key_generator: K,
    gateways: F,
    persister: AccountPersister,
    options: InteractiveOptions,
}

impl<P, L, K, F> InteractiveCreator<P, L, K, F>
where
    P: Prompter,
    L: WalletLauncher,
    K: KeyGenerator,
    F: GatewayFactory,
{
    pub fn new(
        prompter: P,
        launcher: L,
        key_generator: K,
        gateways: F,
        persister: AccountPersister,
        options: InteractiveOptions,
    ) -> Self {
        Self {
            prompter,
            launcher,
            key_generator,
            gateways,
            persister,
            options,
        }
    }

    /// Runs the creation flow against `state`.
    ///
    /// Nothing is written to the configuration unless every step before persisting
    /// succeeded.
    pub async fn run<RW: ReaderWriter + Clone>(
        &self,
        state: &mut State<RW>,
    ) -> Result<CreatedAccount, CreateError> {
        let network = self.prompter.select_network(&ChainNetwork::defaults())?;
        let gateway = self.gateways.gateway(&network)?;

        println!("{}", "\nSTARTING ACCOUNT CREATION PROCESS".bright_cyan().bold());
        println!("{}", "(1/3) Generating public and private keys".bright_cyan());
        let key = self.key_generator.generate(self.options.sig_algo)?;
        let account_key = AccountKey::new(0, &key.public_key, self.options.hash_algo, FULL_WEIGHT)?;
        println!("{} {}", "Public key:".bright_cyan(), key.public_key);

        println!(
            "{}",
            format!("(2/3) Creating account on {} with generated keys", network).bright_cyan()
        );
        let address = if network.is_local() {
            self.create_directly(state, gateway.as_ref(), &account_key).await?
        } else {
            self.create_through_wallet(&network, gateway.clone(), &key).await?
        };

        let on_chain = gateway.get_account(address).await?;
        debug!(target: "corvid::accounts::interactive", %address, keys = on_chain.keys.len(), "fetched created account");

        let existing: Vec<String> = state.accounts().names().map(str::to_string).collect();
        let name = self.prompter.account_name(&existing)?;
        validate_name(&name, &existing)?;

        println!(
            "{}",
            format!("(2/3) Created account {} at {}", name, on_chain.address)
                .bright_green()
                .bold()
        );

        println!("{}", format!("(3/3) Saving account {name}").bright_cyan());
        let account = local_account(&name, &on_chain, account_key, key);
        let outcome = self.persister.persist(state, account, &network, &|file_name: &str| {
            self.prompter.confirm_ignore(file_name)
        })?;
        info!(target: "corvid::accounts::interactive", %name, %network, ?outcome, "account saved");

        match &outcome {
            PersistOutcome::Shared => println!(
                "{}",
                format!("Saved account {name} in {}", state.path().display()).bright_green()
            ),
            PersistOutcome::Private {
                file_name, ignored, ..
            } => {
                println!(
                    "{}",
                    format!("Private key for {name} saved in {file_name}").bright_green()
                );
                if *ignored {
                    println!(
                        "{}",
                        format!(
                            "{file_name} added to {}",
                            self.persister.ignore_file().display()
                        )
                        .bright_green()
                    );
                }
            }
        }

        Ok(CreatedAccount {
            name,
            network,
            account: on_chain,
            outcome,
        })
    }

    async fn create_directly<RW: ReaderWriter + Clone>(
        &self,
        state: &State<RW>,
        gateway: &dyn Gateway,
        account_key: &AccountKey,
    ) -> Result<Address, CreateError> {
        let signer = state.emulator_service_account()?;
        let account = gateway
            .create_account(&signer, std::slice::from_ref(account_key), &[])
            .await?;

        println!(
            "{}",
            "The account only lives as long as the emulator keeps its state. Restarting the emulator resets every account unless it persists its state."
                .yellow()
        );
        Ok(account.address)
    }

    async fn create_through_wallet(
        &self,
        network: &ChainNetwork,
        gateway: Arc<dyn Gateway>,
        key: &KeyPair,
    ) -> Result<Address, CreateError> {
        let url = network
            .wallet_url(&key.public_key, self.options.hash_algo)
            .ok_or_else(|| {
                CreateError::Validation(format!(
                    "network {network} has no wallet to create accounts with"
                ))
            })?;
        let start_height = gateway.get_latest_block_height().await?;

        println!(
            "{}",
            format!("Opening {url}, follow the steps there to create the account.").bright_cyan()
        );
        self.launcher.open(&url)?;

        println!(
            "{}",
            "Waiting for the account to be created, please finish all steps in the browser..."
                .bright_cyan()
        );
        let poller = ConfirmationPoller::new(gateway, self.options.poll.clone());
        Ok(poller.find_address_for_key(&key.public_key, start_height).await?)
    }
}

fn validate_name(name: &str, existing: &[String]) -> Result<(), CreateError> {
    validate_account_name(name)?;
    if existing.iter().any(|n| n == name) {
        return Err(CreateError::Validation(format!(
            "account name {name} is already used in configuration"
        )));
    }
    Ok(())
}

/// The configuration record for a created account, keyed on the on-chain index of the
/// generated key.
fn local_account(
    name: &str,
    on_chain: &OnChainAccount,
    account_key: AccountKey,
    key: KeyPair,
) -> Account {
    let key_descriptor = on_chain
        .keys
        .iter()
        .find(|k| key.public_key.matches_hex(&k.public_key))
        .map(|k| AccountKey {
            index: k.index,
            ..account_key.clone()
        })
        .unwrap_or(account_key);

    Account::inline(name, on_chain.address, vec![key_descriptor], key.private_key)
}
