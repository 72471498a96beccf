use clap::Subcommand;

pub mod add;
pub mod alias;
pub mod list;
pub mod remove;
pub mod resolve;

#[derive(Debug, Subcommand)]
#[command(about = "Manage contracts and their network aliases.")]
pub enum ContractsCommands {
    #[command(name = "add")]
    Add(add::AddCommand),

    #[command(name = "alias")]
    Alias(alias::AliasCommand),

    #[command(name = "list")]
    List(list::ListCommand),

    #[command(name = "remove")]
    Remove(remove::RemoveCommand),

    #[command(name = "resolve")]
    Resolve(resolve::ResolveCommand),
}
