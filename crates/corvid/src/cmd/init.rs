use account_utils::parse_private_key;
use clap::Parser;
use colored::Colorize;
use corvid_cli_runner::CliContext;
use corvid_config::{Account, FileSystem, State};
use corvid_primitives::{consts::EMULATOR_SERVICE_ACCOUNT, Address};

use crate::{common::ConfigArgs, utils::print_success_message};

#[derive(Debug, Parser)]
#[clap(about = "Create a new project configuration.")]
pub struct InitCommand {
    #[arg(long, help = "Overwrite an existing configuration.")]
    force: bool,

    #[arg(
        long,
        value_name = "ADDRESS",
        requires = "service_private_key",
        help = "Address of the emulator service account."
    )]
    service_address: Option<Address>,

    #[arg(
        long,
        value_name = "PRIVATE_KEY",
        requires = "service_address",
        help = "Hex private key of the emulator service account."
    )]
    service_private_key: Option<String>,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl InitCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let path = self.config.config_path()?;
        if path.exists() && !self.force {
            eyre::bail!("Configuration already exists at {:?}, use --force to overwrite it.", path);
        }

        let mut state = State::init(FileSystem, &path);
        if let (Some(address), Some(private_key)) = (self.service_address, self.service_private_key) {
            state.accounts_mut().add_or_update(Account::inline(
                EMULATOR_SERVICE_ACCOUNT,
                address,
                Vec::new(),
                parse_private_key(&private_key)?,
            ));
        } else {
            println!(
                "{}",
                format!(
                    "No {EMULATOR_SERVICE_ACCOUNT} configured, pass --service-address and --service-private-key to create emulator accounts."
                )
                .yellow()
            );
        }
        state.save_default()?;

        print_success_message(&format!("✅ Configuration initialized at {}", path.display()));
        Ok(())
    }
}
