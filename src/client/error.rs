//! Typed errors for the recipe API gateway.
//!
//! Every request either succeeds with decoded JSON or fails with exactly one
//! [`RecipeApiError`]. The gateway never exits the process; callers decide
//! which failures end the program (see [`RecipeApiError::is_fatal`]).

use thiserror::Error;

/// Maximum number of characters of an unclassified error body kept.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Error, Debug)]
pub enum RecipeApiError {
    /// No API key in the environment
    #[error("Missing API key!")]
    MissingApiKey,

    /// API key present but without the `rapi_` prefix
    #[error("Invalid API key format!")]
    InvalidApiKeyFormat,

    /// HTTP 401
    #[error("Authentication failed!")]
    Unauthorized,

    /// HTTP 403
    #[error("Access denied!")]
    Forbidden,

    /// HTTP 404, the only failure a command is expected to handle itself
    #[error("Resource not found")]
    NotFound,

    /// HTTP 429
    #[error("Rate limit exceeded!")]
    RateLimited,

    /// Any other non-2xx status; `body` is already truncated
    #[error("API error ({status})!")]
    Api { status: u16, body: String },

    /// The request never produced a response
    #[error("Network error!")]
    Network(#[source] reqwest::Error),

    /// A 2xx response whose body was not the expected JSON
    #[error("Unexpected response from the API!")]
    Decode(#[source] serde_json::Error),
}

impl RecipeApiError {
    /// Builds the error for an unclassified status, truncating the body.
    pub fn api(status: u16, body: &str) -> Self {
        Self::Api {
            status,
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        }
    }

    /// Classifies a non-2xx status and its body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            _ => Self::api(status, body),
        }
    }

    /// HTTP status behind the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::RateLimited => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::InvalidApiKeyFormat => "INVALID_API_KEY",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::RateLimited => "RATE_LIMITED",
            Self::Api { .. } => "API_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Whether the failure ends the program with a non-zero exit code.
    ///
    /// A non-fatal error that reaches the entry point is still reported, but
    /// the process exits 0.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Remediation lines printed under the headline.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::MissingApiKey => vec![
                "To fix this:".to_string(),
                "  1. Copy .env.example to .env".to_string(),
                "  2. Add your API key from https://recipe-api.com".to_string(),
            ],
            Self::InvalidApiKeyFormat => vec![
                "API keys should start with \"rapi_\"".to_string(),
                "Get your key from https://recipe-api.com".to_string(),
            ],
            Self::Unauthorized => vec![
                "Your API key was rejected. Please check:".to_string(),
                "  - The key is copied correctly (no extra spaces)".to_string(),
                "  - The key is active in your dashboard".to_string(),
            ],
            Self::Forbidden => vec![
                "Your account may not have access to this endpoint.".to_string(),
                "Check your plan limits at https://recipe-api.com".to_string(),
            ],
            Self::NotFound => vec!["The requested resource does not exist.".to_string()],
            Self::RateLimited => vec![
                "You have exceeded your API limits.".to_string(),
                "Check your remaining quota in the dashboard.".to_string(),
            ],
            Self::Api { body, .. } => vec![format!("Response: {}", body)],
            Self::Network(_) => vec![
                "Could not connect to the API. Please check:".to_string(),
                "  - Your internet connection".to_string(),
                "  - The API status at https://recipe-api.com".to_string(),
            ],
            Self::Decode(e) => vec![format!("The response could not be read: {}", e)],
        }
    }
}
