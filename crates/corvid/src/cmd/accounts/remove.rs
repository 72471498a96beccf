use clap::Parser;
use colored::Colorize;
use corvid_cli_runner::CliContext;

use crate::{common::ConfigArgs, utils::print_success_message};

#[derive(Debug, Parser)]
#[clap(about = "Remove an account and its deployments from the configuration.")]
pub struct RemoveCommand {
    #[arg(value_name = "NAME", help = "Name of the account.")]
    name: String,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl RemoveCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let Self { name, config } = self;
        let mut state = config.load_state()?;

        let removed = state.accounts_mut().remove(&name)?;
        let deployments = state.deployments_mut().remove_account(&name);
        state.save_default()?;

        if let Some(location) = removed.location() {
            println!(
                "{}",
                format!(
                    "The private file {} was left in place, delete it if the key is no longer needed.",
                    state.private_path(location).display()
                )
                .yellow()
            );
        }
        if deployments > 0 {
            println!("{}", format!("Removed {deployments} deployment(s) of {name}.").bright_cyan());
        }
        print_success_message(&format!("✅ Successfully removed account: {name}"));

        Ok(())
    }
}
