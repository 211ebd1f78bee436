//! # Recipe API CLI Library
//!
//! This library provides a small command-line client for the recipe-api.com
//! HTTP API. It consists of a few layers:
//!
//! ## Client Module
//!
//! The [`client`] module provides the HTTP gateway: credential resolution,
//! URL construction, the authenticated GET and the classification of every
//! outcome into a typed [`RecipeApiError`].
//!
//! ## Commands Module
//!
//! The [`commands`] module holds one command per API resource. Each command
//! reads its flags, calls the client once and renders the result through a
//! [`Terminal`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_api_cli::{RecipeApiClient, RecipeQuery};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecipeApiClient::new(
//!     "https://recipe-api.com".to_string(),
//!     Some("rapi_example".to_string()),
//! );
//!
//! let recipes = client
//!     .list_recipes(&RecipeQuery { q: Some("pasta".to_string()), ..Default::default() })
//!     .await?;
//! println!("Found {} recipes", recipes.meta.total);
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod client;
pub mod commands;
pub mod config;
pub mod format;

pub use args::ArgMap;
pub use commands::{Cli, Command};
pub use client::{IngredientQuery, RecipeApiClient, RecipeApiError, RecipeQuery};
pub use config::Config;
pub use format::Terminal;
