use clap::Parser;
use corvid_cli_runner::CliContext;
use corvid_config::Contract;

use crate::{common::ConfigArgs, utils::print_success_message};

#[derive(Debug, Parser)]
#[clap(about = "Add a contract, or change the location of an existing one.")]
pub struct AddCommand {
    #[arg(value_name = "NAME", help = "Name of the contract.")]
    name: String,

    #[arg(value_name = "LOCATION", help = "Path to the contract source.")]
    location: String,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl AddCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let Self {
            name,
            location,
            config,
        } = self;

        if name.trim().is_empty() {
            eyre::bail!("Contract name cannot be empty.");
        }

        let mut state = config.load_state()?;
        let contract = match state.contracts().by_name(&name) {
            Ok(existing) => Contract {
                location,
                ..existing.clone()
            },
            Err(_) => Contract::new(&name, location),
        };
        state.contracts_mut().add_or_update(contract);
        state.save_default()?;

        print_success_message(&format!("✅ Successfully saved contract: {name}"));
        Ok(())
    }
}
