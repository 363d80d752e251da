//! Runtime configuration for the dashboard data layer.

use income_core::{DataError, Result};
use std::fmt;

/// Environment variable holding the Alpha Vantage API key.
const API_KEY_VAR: &str = "AV_API_KEY";

/// Runtime configuration.
///
/// Built explicitly and handed to providers at construction; nothing on the
/// fetch path reads ambient process state.
#[derive(Clone)]
pub struct Config {
    api_key: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Creates a configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// The API key to authenticate upstream requests with.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Loads the configuration from the process environment.
    ///
    /// A `.env` file is honored when present. Returns
    /// [`DataError::Configuration`] when `AV_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env_value(std::env::var(API_KEY_VAR).ok())
    }

    fn from_env_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(DataError::Configuration(format!(
                "{API_KEY_VAR} is not set"
            ))),
        }
    }
}
