//! Process configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//! - `TODO_STORAGE`: `mongo` (default) | `memory`
//! - `MONGODB_URI`: store address (default `mongodb://127.0.0.1:27017`)
//! - `TODO_DATABASE`: database name (default `demo_todo`)
//! - `TODO_COLLECTION`: collection name (default `todo`)
//! - `HOST` / `PORT`: listen address (default `0.0.0.0:9000`)
//! - `SHUTDOWN_GRACE_SECS`: graceful drain period (default `5`)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid storage mode '{0}', expected 'mongo' or 'memory'")]
    InvalidStorageMode(String),

    #[error("invalid value '{value}' for {name}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    #[default]
    Mongo,
    Memory,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" | "in_memory" => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidStorageMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageMode,
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    pub host: String,
    pub port: u16,
    pub shutdown_grace: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageMode::Mongo,
            mongodb_uri: "mongodb://127.0.0.1:27017".to_string(),
            database: "demo_todo".to_string(),
            collection: "todo".to_string(),
            host: "0.0.0.0".to_string(),
            port: 9000,
            shutdown_grace: Duration::from_secs(5),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset or
    /// blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let storage = match get("TODO_STORAGE") {
            Some(value) => value.parse()?,
            None => defaults.storage,
        };
        let port = match get("PORT") {
            Some(value) => parse_number("PORT", &value)?,
            None => defaults.port,
        };
        let shutdown_grace = match get("SHUTDOWN_GRACE_SECS") {
            Some(value) => Duration::from_secs(parse_number("SHUTDOWN_GRACE_SECS", &value)?),
            None => defaults.shutdown_grace,
        };

        Ok(Self {
            storage,
            mongodb_uri: get("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database: get("TODO_DATABASE").unwrap_or(defaults.database),
            collection: get("TODO_COLLECTION").unwrap_or(defaults.collection),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            shutdown_grace,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_number<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
