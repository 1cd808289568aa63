use std::{env, path::PathBuf};

use dotenv::dotenv;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("NUTRIPLAN_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("NUTRIPLAN_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_config: PathBuf,
    /// Fixed seed for meal selection; random picks when absent.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("NUTRIPLAN_PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };
        let seed = lookup("NUTRIPLAN_SEED")
            .map(|seed| seed.parse().map_err(|_| ConfigError::InvalidSeed(seed)))
            .transpose()?;

        Ok(Self {
            host: lookup("NUTRIPLAN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            log_config: lookup("NUTRIPLAN_LOG_CONFIG")
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned())
                .into(),
            seed,
        })
    }
}
