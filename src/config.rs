use std::env;

use thiserror::Error;

use crate::api_client::API_BASE_URL;

pub const API_KEY_VAR: &str = "CLASH_OF_CLANS_API_KEY";
pub const API_URL_VAR: &str = "CLASH_OF_CLANS_API_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set in the environment or in your .env file")]
    MissingVar(&'static str),

    #[error("{0} does not contain any token")]
    NoTokens(&'static str),
}

/// Holds the application's configuration values.
#[derive(Clone, Debug)]
pub struct Config {
    /// One or more API tokens, used in turn.
    pub api_keys: Vec<String>,
    pub api_url: String,
}

impl Config {
    /// Creates a new Config instance by loading values from environment variables.
    ///
    /// Variables from a .env file in the working directory are loaded first, if
    /// the file exists. `CLASH_OF_CLANS_API_KEY` is required and may hold several
    /// comma-separated tokens; `CLASH_OF_CLANS_API_URL` defaults to the public API.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        dotenvy::dotenv().ok();

        let api_keys = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingVar(API_KEY_VAR))?;
        let api_url = env::var(API_URL_VAR).ok();

        Self::from_parts(&api_keys, api_url)
    }

    /// Builds a Config from the raw variable values.
    pub fn from_parts(api_keys: &str, api_url: Option<String>) -> Result<Self, ConfigError> {
        let api_keys: Vec<String> = api_keys
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .collect();

        if api_keys.is_empty() {
            return Err(ConfigError::NoTokens(API_KEY_VAR));
        }

        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Config { api_keys, api_url })
    }
}
