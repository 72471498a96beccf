use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use corvid_cli_runner::CliContext;
use corvid_gateway::{events::LATEST, Events, HttpGateway};
use prettytable::{row, Table};

use crate::common::{ConfigArgs, NetworkArgs};

#[derive(Debug, Subcommand)]
#[command(about = "Query chain events.")]
pub enum EventsCommands {
    #[command(name = "get")]
    Get(GetEventsCommand),
}

#[derive(Debug, Parser)]
#[clap(about = "Get events in a block height range.")]
pub struct GetEventsCommand {
    #[arg(value_name = "EVENT_NAME", help = "Fully qualified event type.")]
    name: String,

    #[arg(value_name = "START_HEIGHT", help = "First block height of the range.")]
    start: String,

    #[arg(
        value_name = "END_HEIGHT",
        default_value = LATEST,
        help = "Last block height of the range, or `latest`."
    )]
    end: String,

    #[clap(flatten)]
    config: ConfigArgs,

    #[clap(flatten)]
    network: NetworkArgs,
}

impl GetEventsCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let state = self.config.load_state()?;
        let network = self.network.network(&state)?;
        let events = Events::new(Arc::new(HttpGateway::new(network.host())?));

        let blocks = events.get(&self.name, &self.start, &self.end).await?;
        if blocks.iter().all(|block| block.events.is_empty()) {
            println!("{}", "No events found.".bright_cyan().bold());
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["height", "transaction", "index", "type", "payload"]);
        for block in &blocks {
            for event in &block.events {
                table.add_row(row![
                    block.height,
                    event.transaction_id,
                    event.index,
                    event.event_type,
                    event.payload
                ]);
            }
        }

        table.printstd();

        Ok(())
    }
}
