//! Runtime configuration read from the environment.

use std::env;

use crate::client::auth::API_KEY_ENV;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://recipe-api.com";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "RECIPE_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Raw credential, validated by the client when a request is made
    pub api_key: Option<String>,
    /// Whether terminal output may use ANSI colors
    pub color: bool,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// A `.env` file should already have been loaded by the caller. The API
    /// key is not checked here so that commands can print their usage
    /// without one.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = env::var(API_KEY_ENV).ok();
        let color = env::var_os("NO_COLOR").is_none();

        Self {
            base_url,
            api_key,
            color,
        }
    }
}
