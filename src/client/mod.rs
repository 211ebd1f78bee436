//! # Recipe API HTTP Client
//!
//! This module provides the HTTP gateway to recipe-api.com: API key handling,
//! the single authenticated GET, and the typed endpoint methods built on it.
//!
//! ## Modules
//!
//! - [`auth`] - API key resolution and format validation
//! - [`client`] - The gateway and one method per endpoint
//! - [`error`] - The typed error every request can fail with
//! - [`types`] - Response shapes mirroring the remote JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_api_cli::client::RecipeApiClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecipeApiClient::new(
//!     "https://recipe-api.com".to_string(),
//!     std::env::var("RECIPE_API_KEY").ok(),
//! );
//!
//! let cuisines = client.list_cuisines().await?;
//! println!("Found {} cuisines", cuisines.data.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod types;

pub use client::{build_url, IngredientQuery, QueryParams, RecipeApiClient, RecipeQuery};
pub use error::RecipeApiError;
pub use types::*;
