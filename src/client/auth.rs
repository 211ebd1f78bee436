//! API key handling for recipe-api.com.
//!
//! Every request carries the key in the `X-API-Key` header. Keys are issued
//! from the recipe-api.com dashboard and always start with `rapi_`; anything
//! else is rejected locally before a request is made.

use crate::client::error::RecipeApiError;

/// Environment variable the API key is read from.
pub const API_KEY_ENV: &str = "RECIPE_API_KEY";

/// Prefix every valid API key starts with.
pub const API_KEY_PREFIX: &str = "rapi_";

/// Header the API key is sent in.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// # Validated API Key
///
/// A key that passed the local format check.
///
/// The key is never logged in full; use [`ApiKey::preview`] for diagnostics.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Resolves a raw credential into a usable key.
    ///
    /// A missing or empty value yields [`RecipeApiError::MissingApiKey`]; a value
    /// without the `rapi_` prefix yields [`RecipeApiError::InvalidApiKeyFormat`].
    pub fn resolve(raw: Option<&str>) -> Result<Self, RecipeApiError> {
        let key = match raw {
            Some(key) if !key.is_empty() => key,
            _ => {
                tracing::debug!("{} is not set", API_KEY_ENV);
                return Err(RecipeApiError::MissingApiKey);
            }
        };

        if !key.starts_with(API_KEY_PREFIX) {
            tracing::debug!("API key does not start with {:?}", API_KEY_PREFIX);
            return Err(RecipeApiError::InvalidApiKeyFormat);
        }

        tracing::debug!("Using API key: {}", Self::preview_of(key));
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First ten characters of the key followed by `...`.
    pub fn preview(&self) -> String {
        Self::preview_of(&self.0)
    }

    fn preview_of(key: &str) -> String {
        let head: String = key.chars().take(10).collect();
        format!("{}...", head)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.preview()).finish()
    }
}
