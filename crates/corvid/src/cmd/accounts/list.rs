use clap::Parser;
use colored::Colorize;
use corvid_cli_runner::CliContext;
use corvid_config::AccountSource;
use prettytable::{row, Table};

use crate::common::ConfigArgs;

#[derive(Debug, Parser)]
#[clap(about = "List accounts in the configuration.")]
pub struct ListCommand {
    #[clap(flatten)]
    config: ConfigArgs,
}

impl ListCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let state = self.config.load_state()?;

        if state.accounts().is_empty() {
            println!("{}", "No accounts found.".bright_cyan().bold());
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["name", "address", "keys", "source"]);

        for account in state.accounts() {
            let address = account
                .address
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string());
            let source = match &account.source {
                AccountSource::Inline { .. } => "inline".to_string(),
                AccountSource::FileReference { location } => location.display().to_string(),
            };
            table.add_row(row![account.name, address, account.keys.len(), source]);
        }

        table.printstd();

        Ok(())
    }
}
