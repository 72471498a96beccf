pub mod accounts;
pub mod contracts;
pub mod events;
pub mod init;
pub mod prompt;
