use std::{env, num::ParseIntError};

use dotenv::dotenv;

const HOST_VAR: &str = "HEALTHCALC_HOST";
const PORT_VAR: &str = "HEALTHCALC_PORT";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HEALTHCALC_PORT must be a port number, got \"{0}\"")]
    InvalidPort(String, #[source] ParseIntError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the bind address from the environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort(raw, e))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }
}
