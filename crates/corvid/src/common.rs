use std::path::PathBuf;

use clap::Parser;
use corvid_config::{network::EMULATOR_NETWORK, ChainNetwork, FileSystem, ReaderWriter, State};
use corvid_primitives::dirs::{default_config_path, default_ignore_file};

#[derive(Debug, Parser, Clone)]
pub struct ConfigArgs {
    #[arg(
        long,
        value_name = "CONFIG_PATH",
        help = "Path to the project configuration. Defaults to ./corvid.json."
    )]
    config_path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "IGNORE_FILE",
        help = "Ignore file that private account files are added to. Defaults to ./.gitignore."
    )]
    ignore_file: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn config_path(&self) -> eyre::Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Ok(default_config_path()?),
        }
    }

    pub fn ignore_file(&self) -> eyre::Result<PathBuf> {
        match &self.ignore_file {
            Some(path) => Ok(path.clone()),
            None => Ok(default_ignore_file()?),
        }
    }

    pub fn load_state(&self) -> eyre::Result<State<FileSystem>> {
        let path = self.config_path()?;
        State::load(FileSystem, &path).map_err(|e| {
            eyre::eyre!("{e}. Run `corvid init` to create a configuration at {:?}.", path)
        })
    }
}

#[derive(Debug, Parser, Clone)]
pub struct NetworkArgs {
    #[arg(
        long,
        value_name = "NETWORK",
        default_value = EMULATOR_NETWORK,
        help = "Network from the configuration to run the command against."
    )]
    network: String,
}

impl NetworkArgs {
    pub fn network<RW: ReaderWriter + Clone>(
        &self,
        state: &State<RW>,
    ) -> eyre::Result<ChainNetwork> {
        Ok(state.network(&self.network)?)
    }
}
