mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Values taken from the process environment that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub api_key: Option<String>,
    pub port: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GROQ_API_KEY").ok(),
            port: env::var("PORT").ok(),
        }
    }
}

/// Loads `.env`, the YAML config file and environment overrides, in that order.
pub async fn load() -> Result<Config> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(Error::config(format!("Failed to read .env: {}", e)));
        }
    }

    let explicit_path = env::var("CONFIG_PATH").ok();
    let config = match explicit_path.as_deref() {
        Some(path) => load_file(path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_file(DEFAULT_CONFIG_PATH).await?,
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_overrides(config, EnvOverrides::from_env())?;
    validate(&config)?;

    Ok(config)
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty file deserializes to unit, not to an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

pub fn apply_overrides(mut config: Config, overrides: EnvOverrides) -> Result<Config> {
    if let Some(api_key) = overrides.api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = api_key;
    }

    if let Some(port) = overrides.port.filter(|p| !p.trim().is_empty()) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(
            "No API key configured: set GROQ_API_KEY or llm.api_key",
        ));
    }
    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }
    Ok(())
}
