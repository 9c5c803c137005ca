use std::{collections::HashMap, fs::read_to_string, io, path::Path};

use derive_getters::Getters;
use serde::Deserialize;
use thiserror::Error;

use super::AccountConfig;

#[derive(Debug, Deserialize, Getters)]
pub struct Config {
    accounts: HashMap<String, AccountConfig>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file is not readable")]
    Read(#[from] io::Error),
    #[error("config file is not parseable")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn load_from_file(file: &Path) -> Result<Self, ConfigError> {
        let contents = read_to_string(file)?;

        Ok(toml::from_str(&contents)?)
    }

    pub fn account(&self, name: &str) -> Option<&AccountConfig> {
        self.accounts.get(name)
    }
}
