use clap::Parser;
use corvid_cli_runner::CliContext;
use corvid_gateway::{Gateway, HttpGateway};
use corvid_primitives::Address;

use crate::common::{ConfigArgs, NetworkArgs};

use super::print_account;

#[derive(Debug, Parser)]
#[clap(about = "Fetch an account from the network.")]
pub struct GetCommand {
    #[arg(value_name = "ADDRESS", help = "Address of the account.")]
    address: Address,

    #[clap(flatten)]
    config: ConfigArgs,

    #[clap(flatten)]
    network: NetworkArgs,
}

impl GetCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let state = self.config.load_state()?;
        let network = self.network.network(&state)?;
        let gateway = HttpGateway::new(network.host())?;

        let account = gateway.get_account(self.address).await?;
        print_account(&account);

        Ok(())
    }
}
