use clap::Parser;
use colored::Colorize;
use corvid_cli_runner::CliContext;
use prettytable::{row, Table};

use crate::common::ConfigArgs;

#[derive(Debug, Parser)]
#[clap(about = "List contracts in the configuration.")]
pub struct ListCommand {
    #[clap(flatten)]
    config: ConfigArgs,
}

impl ListCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let state = self.config.load_state()?;

        if state.contracts().is_empty() {
            println!("{}", "No contracts found.".bright_cyan().bold());
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["name", "location", "aliases"]);

        for contract in state.contracts() {
            let aliases = contract
                .aliases
                .iter()
                .map(|alias| format!("{}: {}", alias.network, alias.address))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(row![contract.name, contract.location, aliases]);
        }

        table.printstd();

        Ok(())
    }
}
