use clap::Parser;
use corvid_cli_runner::CliContext;

use crate::{common::ConfigArgs, utils::print_success_message};

#[derive(Debug, Parser)]
#[clap(about = "Remove a contract from the configuration.")]
pub struct RemoveCommand {
    #[arg(value_name = "NAME", help = "Name of the contract.")]
    name: String,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl RemoveCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let Self { name, config } = self;
        let mut state = config.load_state()?;

        state.contracts_mut().remove(&name)?;
        state.deployments_mut().remove_contract(&name);
        state.save_default()?;

        print_success_message(&format!("✅ Successfully removed contract: {name}"));
        Ok(())
    }
}
