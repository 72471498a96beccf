use std::io;

use colored::Colorize;
use corvid_config::{validate_account_name, ChainNetwork};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::warn;
use url::Url;

use crate::accounts::{CreateError, Prompter, WalletLauncher};

/// Asks questions on the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPrompter;

fn prompt_error(e: dialoguer::Error) -> CreateError {
    match e {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            CreateError::Prompt("cancelled by user".to_string())
        }
        dialoguer::Error::IO(e) => CreateError::Prompt(e.to_string()),
    }
}

impl Prompter for TerminalPrompter {
    fn select_network(&self, networks: &[ChainNetwork]) -> Result<ChainNetwork, CreateError> {
        let names: Vec<&str> = networks.iter().map(ChainNetwork::name).collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("\nChoose a network to create the account on:")
            .items(&names)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        networks
            .get(selection)
            .cloned()
            .ok_or_else(|| CreateError::Prompt(format!("invalid network selection {selection}")))
    }

    fn account_name(&self, existing: &[String]) -> Result<String, CreateError> {
        let existing = existing.to_vec();
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("\nEnter an account name:")
            .validate_with(move |input: &String| -> Result<(), String> {
                let name = input.trim();
                if let Err(err) = validate_account_name(name) {
                    Err(err.to_string())
                } else if existing.iter().any(|n| n == name) {
                    Err(format!("Account name {name} is already used in the configuration."))
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(prompt_error)?;

        Ok(name.trim().to_string())
    }

    fn confirm_ignore(&self, file_name: &str) -> bool {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("\nAdd {file_name} to the ignore file?"))
            .default(true)
            .interact();
        answer_or_decline(answer, file_name)
    }
}

/// An unreadable answer counts as "no" and is reported, so the ignore file is never
/// changed without consent.
fn answer_or_decline(answer: Result<bool, dialoguer::Error>, file_name: &str) -> bool {
    answer.unwrap_or_else(|err| {
        warn!(target: "corvid::prompt", %err, file_name, "could not read answer, not adding to ignore file");
        println!(
            "{}",
            format!("Could not read the answer ({err}), {file_name} was not added to the ignore file.")
                .yellow()
        );
        false
    })
}

/// Prints the wallet URL for the user to open.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalLauncher;

impl WalletLauncher for TerminalLauncher {
    fn open(&self, url: &Url) -> Result<(), CreateError> {
        println!("\n{}", "Open this link in your browser to create the account:".bright_cyan());
        println!("{}\n", url.as_str().underline());
        Ok(())
    }
}
