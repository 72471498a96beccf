use clap::Parser;
use colored::Colorize;
use corvid_cli_runner::CliContext;

use crate::common::ConfigArgs;

#[derive(Debug, Parser)]
#[clap(about = "Show the address a contract is aliased to on a network.")]
pub struct ResolveCommand {
    #[arg(value_name = "NAME", help = "Name of the contract.")]
    name: String,

    #[arg(value_name = "NETWORK", help = "Network to resolve the contract on.")]
    network: String,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl ResolveCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let state = self.config.load_state()?;

        let contract = state.contracts().by_name(&self.name)?;
        if !contract.is_aliased() {
            println!(
                "{}",
                format!("{} has no aliases, it is deployed from {}.", self.name, contract.location)
                    .yellow()
            );
            return Ok(());
        }

        match state.contracts().resolve_address(&self.name, &self.network)? {
            Some(address) => println!("{address}"),
            None => println!(
                "{}",
                format!("{} is not aliased on {}.", self.name, self.network).yellow()
            ),
        }

        Ok(())
    }
}
