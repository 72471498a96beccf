/// File name of the shared project configuration.
pub const DEFAULT_CONFIG_FILENAME: &str = "corvid.json";

/// Suffix appended to an account name to build its private configuration file name.
pub const PRIVATE_CONFIG_SUFFIX: &str = ".private.json";

/// Version-control ignore file that private configuration files are appended to.
pub const DEFAULT_IGNORE_FILENAME: &str = ".gitignore";

/// Name of the account the local emulator uses to fund and sign account creations.
pub const EMULATOR_SERVICE_ACCOUNT: &str = "emulator-account";

/// Returns the private configuration file name for `account_name`.
///
/// ## Example
///
/// `alice` -> `alice.private.json`
pub fn private_config_filename(account_name: &str) -> String {
    format!("{account_name}{PRIVATE_CONFIG_SUFFIX}")
}
