use clap::Parser;
use corvid_cli_runner::CliContext;
use corvid_primitives::Address;

use crate::{common::ConfigArgs, utils::print_success_message};

#[derive(Debug, Parser)]
#[clap(about = "Pin the address a contract is deployed at on a network.")]
pub struct AliasCommand {
    #[arg(value_name = "NAME", help = "Name of the contract.")]
    name: String,

    #[arg(value_name = "NETWORK", help = "Network the address belongs to.")]
    network: String,

    #[arg(value_name = "ADDRESS", help = "Address of the deployed contract.")]
    address: Address,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl AliasCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let Self {
            name,
            network,
            address,
            config,
        } = self;

        let mut state = config.load_state()?;
        let network = state.network(&network)?;

        let contract = state
            .contracts()
            .by_name(&name)?
            .clone()
            .with_alias(network.name(), address);
        state.contracts_mut().add_or_update(contract);
        state.save_default()?;

        print_success_message(&format!(
            "✅ {name} is now aliased to {address} on {network}"
        ));
        Ok(())
    }
}
