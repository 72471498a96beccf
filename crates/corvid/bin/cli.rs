use clap::{
    builder::{styling::AnsiColor, Styles},
    ArgAction, Parser, Subcommand,
};
use corvid::{
    cmd::{
        accounts::AccountsCommands, contracts::ContractsCommands, events::EventsCommands,
        init::InitCommand,
    },
    logging::init_tracing,
};
use corvid_cli_runner::CliRunner;
use corvid_version::SHORT_VERSION;

/// The verbosity level.
pub type Verbosity = u8;

#[derive(Debug, Parser)]
#[command(
    name = "corvid",
    about = "Manage accounts, contracts and aliases of a chain project.",
    version = SHORT_VERSION.as_str(),
    term_width = 80,
    styles = get_color_style()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    /// Verbosity level of the log messages.
    ///
    /// Pass multiple times to increase the verbosity (e.g. -v, -vv, -vvv).
    ///
    /// - 1 (-v): info
    /// - 2 (-vv): debug
    /// - 3 (-vvv): trace
    #[arg(help_heading = "Display options", global = true, short, long, verbatim_doc_comment, action = ArgAction::Count)]
    verbosity: Verbosity,
}

impl Cli {
    pub fn run(self) -> eyre::Result<()> {
        init_tracing(self.verbosity, self.debug)?;

        let runner = CliRunner::default();
        match self.command {
            Commands::Accounts(accounts) => match accounts {
                AccountsCommands::Create(create) => {
                    runner.run_command_until_exit(|ctx| create.execute(ctx))
                }
                AccountsCommands::Get(get) => runner.run_command_until_exit(|ctx| get.execute(ctx)),
                AccountsCommands::List(list) => {
                    runner.run_command_until_exit(|ctx| list.execute(ctx))
                }
                AccountsCommands::Remove(remove) => {
                    runner.run_command_until_exit(|ctx| remove.execute(ctx))
                }
            },
            Commands::Contracts(contracts) => match contracts {
                ContractsCommands::Add(add) => runner.run_command_until_exit(|ctx| add.execute(ctx)),
                ContractsCommands::Alias(alias) => {
                    runner.run_command_until_exit(|ctx| alias.execute(ctx))
                }
                ContractsCommands::List(list) => {
                    runner.run_command_until_exit(|ctx| list.execute(ctx))
                }
                ContractsCommands::Remove(remove) => {
                    runner.run_command_until_exit(|ctx| remove.execute(ctx))
                }
                ContractsCommands::Resolve(resolve) => {
                    runner.run_command_until_exit(|ctx| resolve.execute(ctx))
                }
            },
            Commands::Events(events) => match events {
                EventsCommands::Get(get) => runner.run_command_until_exit(|ctx| get.execute(ctx)),
            },
            Commands::Init(init) => runner.run_command_until_exit(|ctx| init.execute(ctx)),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "accounts", subcommand)]
    Accounts(AccountsCommands),

    #[command(name = "contracts", subcommand)]
    Contracts(ContractsCommands),

    #[command(name = "events", subcommand)]
    Events(EventsCommands),

    #[command(name = "init")]
    Init(InitCommand),
}

fn get_color_style() -> Styles {
    Styles::styled()
        .usage(AnsiColor::Green.on_default().bold().underline())
        .header(AnsiColor::Yellow.on_default().bold().underline())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_explicit_create() {
        let cli = Cli::try_parse_from([
            "corvid",
            "accounts",
            "create",
            "--key",
            "abcd",
            "--key",
            "ef01",
            "--sig-algo",
            "ECDSA_secp256k1",
            "--network",
            "testnet",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Accounts(AccountsCommands::Create(_))
        ));
    }

    #[test]
    fn events_end_defaults_to_latest() {
        let cli = Cli::try_parse_from(["corvid", "events", "get", "A.Foo.Bar", "10", "-vv"]).unwrap();
        assert_eq!(cli.verbosity, 2);
        assert!(matches!(cli.command, Commands::Events(EventsCommands::Get(_))));
    }
}
