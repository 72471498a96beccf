use account_utils::Secp256k1Generator;
use clap::Parser;
use colored::Colorize;
use corvid_cli_runner::CliContext;
use corvid_config::AccountPersister;
use corvid_gateway::{HttpGateway, HttpGatewayFactory};
use corvid_primitives::consts::EMULATOR_SERVICE_ACCOUNT;

use crate::{
    accounts::{
        create::{DEFAULT_HASH_ALGO, DEFAULT_SIG_ALGO},
        create_with_keys, CreateOptions, InteractiveCreator, InteractiveOptions,
    },
    cmd::prompt::{TerminalLauncher, TerminalPrompter},
    common::{ConfigArgs, NetworkArgs},
    utils::print_success_message,
};

use super::print_account;

#[derive(Debug, Parser)]
#[clap(
    about = "Create a new account on a network. Without --key the account is created interactively."
)]
pub struct CreateCommand {
    #[arg(
        long,
        value_name = "SIGNER",
        default_value = EMULATOR_SERVICE_ACCOUNT,
        help = "Account name from configuration used to sign the transaction."
    )]
    signer: String,

    #[arg(long = "key", value_name = "PUBLIC_KEY", help = "Public keys to attach to account.")]
    keys: Vec<String>,

    #[arg(long = "key-weight", value_name = "WEIGHT", help = "Weight for each key.")]
    weights: Vec<u32>,

    #[arg(
        long = "sig-algo",
        value_name = "SIG_ALGO",
        default_value = DEFAULT_SIG_ALGO,
        help = "Signature algorithm of the keys."
    )]
    sig_algos: Vec<String>,

    #[arg(
        long = "hash-algo",
        value_name = "HASH_ALGO",
        default_value = DEFAULT_HASH_ALGO,
        help = "Hash algorithm used for the digest."
    )]
    hash_algos: Vec<String>,

    #[arg(
        long = "contract",
        value_name = "NAME:FILENAME",
        help = "Contract to be deployed during account creation."
    )]
    contracts: Vec<String>,

    #[clap(flatten)]
    config: ConfigArgs,

    #[clap(flatten)]
    network: NetworkArgs,
}

impl CreateCommand {
    pub async fn execute(self, _ctx: CliContext) -> eyre::Result<()> {
        let Self {
            signer,
            keys,
            weights,
            sig_algos,
            hash_algos,
            contracts,
            config,
            network,
        } = self;

        let mut state = config.load_state()?;

        if keys.is_empty() {
            let creator = InteractiveCreator::new(
                TerminalPrompter,
                TerminalLauncher,
                Secp256k1Generator,
                HttpGatewayFactory,
                AccountPersister::new(config.ignore_file()?),
                InteractiveOptions::default(),
            );
            let created = creator.run(&mut state).await?;

            println!("{}", "\nACCOUNT CREATION SUMMARY".bright_cyan().bold());
            println!("{} {}", "Name:".bright_cyan(), created.name);
            println!("{} {}", "Network:".bright_cyan(), created.network);
            print_account(&created.account);
            print_success_message("✅ Account creation process completed!");
            return Ok(());
        }

        let network = network.network(&state)?;
        let gateway = HttpGateway::new(network.host())?;
        let options = CreateOptions {
            signer,
            keys,
            weights,
            sig_algos,
            hash_algos,
            contracts,
        };

        println!(
            "{}",
            format!("🔄 Creating account on {network}.").bright_cyan()
        );
        let account = create_with_keys(&state, &gateway, &options).await?;
        print_account(&account);
        print_success_message("✅ Account created.");

        Ok(())
    }
}
