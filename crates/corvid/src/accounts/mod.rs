pub mod create;
pub mod error;
pub mod interactive;

pub use self::create::{create_with_keys, CreateOptions};
pub use self::error::CreateError;
pub use self::interactive::{
    CreatedAccount, InteractiveCreator, InteractiveOptions, Prompter, WalletLauncher,
};
