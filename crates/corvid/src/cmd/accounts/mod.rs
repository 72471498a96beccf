use clap::Subcommand;
use colored::Colorize;
use corvid_gateway::OnChainAccount;
use prettytable::{row, Table};

use crate::utils::truncate_hex;

pub mod create;
pub mod get;
pub mod list;
pub mod remove;

#[derive(Debug, Subcommand)]
#[command(about = "Create and manage accounts.")]
pub enum AccountsCommands {
    #[command(name = "create")]
    Create(create::CreateCommand),

    #[command(name = "get")]
    Get(get::GetCommand),

    #[command(name = "list")]
    List(list::ListCommand),

    #[command(name = "remove")]
    Remove(remove::RemoveCommand),
}

pub(crate) fn print_account(account: &OnChainAccount) {
    println!("{} {}", "Address:".bright_cyan(), account.address);
    println!("{} {}", "Balance:".bright_cyan(), account.balance);

    if !account.keys.is_empty() {
        let mut table = Table::new();
        table.add_row(row!["index", "public_key", "signature", "hash", "weight"]);
        for key in &account.keys {
            table.add_row(row![
                key.index,
                truncate_hex(&key.public_key, 8),
                key.sig_algo,
                key.hash_algo,
                key.weight
            ]);
        }
        table.printstd();
    }

    if !account.contracts.is_empty() {
        let names: Vec<&str> = account.contracts.keys().map(String::as_str).collect();
        println!("{} {}", "Contracts:".bright_cyan(), names.join(", "));
    }
}
