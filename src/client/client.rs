use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{
    auth::{ApiKey, API_KEY_HEADER},
    error::RecipeApiError,
    types::*,
};
use crate::config::Config;

/// Ordered query parameters; entries without a value are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.entries.push((key.to_string(), Some(value.to_string())));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        self.entries
            .push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Parameters that will actually be sent.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

/// Joins the base URL, an absolute endpoint path and the defined parameters.
pub fn build_url(base_url: &str, endpoint: &str, params: Option<&QueryParams>) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );

    if let Some(params) = params {
        let query: Vec<String> = params
            .defined()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();

        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
    }

    url
}

/// Search and filter options for `/api/v1/recipes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub dietary: Option<String>,
    /// Comma-separated ingredient IDs
    pub ingredients: Option<String>,
    pub max_calories: Option<i64>,
    pub min_protein: Option<i64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl RecipeQuery {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("q", self.q.as_ref())
            .push_opt("category", self.category.as_ref())
            .push_opt("cuisine", self.cuisine.as_ref())
            .push_opt("difficulty", self.difficulty.as_ref())
            .push_opt("dietary", self.dietary.as_ref())
            .push_opt("ingredients", self.ingredients.as_ref())
            .push_opt("max_calories", self.max_calories)
            .push_opt("min_protein", self.min_protein)
            .push_opt("page", self.page)
            .push_opt("per_page", self.per_page);
        params
    }
}

/// Search options for `/api/v1/ingredients`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl IngredientQuery {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("q", self.q.as_ref())
            .push_opt("category", self.category.as_ref())
            .push_opt("page", self.page)
            .push_opt("per_page", self.per_page);
        params
    }
}

pub struct RecipeApiClient {
    base_url: String,
    client: Client,
    /// Raw credential; validated on every request, before any network I/O
    api_key: Option<String>,
}

impl RecipeApiClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            base_url,
            client: Client::new(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    /// Performs an authenticated GET and decodes the JSON body.
    ///
    /// This is the only place that talks to the network. Every failure is
    /// returned as a [`RecipeApiError`]; nothing here exits the process.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<T, RecipeApiError> {
        let api_key = ApiKey::resolve(self.api_key.as_deref())?;
        let url = build_url(&self.base_url, endpoint, params);

        tracing::debug!("Making request to: {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Network error requesting {}: {}", url, e);
                RecipeApiError::Network(e)
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            if let Ok(envelope) = serde_json::from_str::<ApiErrorBody>(&error_body) {
                tracing::debug!(
                    "API returned {} ({}): {}",
                    status,
                    envelope.error.code,
                    envelope.error.message
                );
            } else {
                tracing::debug!("API returned {}", status);
            }

            return Err(RecipeApiError::from_status(status.as_u16(), &error_body));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::debug!("Failed to read response body from {}: {}", url, e);
            RecipeApiError::Network(e)
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!("Failed to parse response from {}: {}", url, e);
            RecipeApiError::Decode(e)
        })
    }

    // Discovery endpoints
    pub async fn list_dietary_flags(&self) -> Result<DietaryFlagsResponse, RecipeApiError> {
        self.get("/api/v1/dietary-flags", None).await
    }

    pub async fn list_cuisines(&self) -> Result<CuisinesResponse, RecipeApiError> {
        self.get("/api/v1/cuisines", None).await
    }

    pub async fn list_ingredient_categories(
        &self,
    ) -> Result<IngredientCategoriesResponse, RecipeApiError> {
        self.get("/api/v1/ingredient-categories", None).await
    }

    pub async fn list_ingredients(
        &self,
        query: &IngredientQuery,
    ) -> Result<IngredientsResponse, RecipeApiError> {
        let response: IngredientsResponse = self
            .get("/api/v1/ingredients", Some(&query.to_params()))
            .await?;
        tracing::debug!("Retrieved {} ingredients", response.data.len());
        Ok(response)
    }

    // Recipe endpoints
    pub async fn list_recipes(
        &self,
        query: &RecipeQuery,
    ) -> Result<RecipeListResponse, RecipeApiError> {
        let response: RecipeListResponse =
            self.get("/api/v1/recipes", Some(&query.to_params())).await?;
        tracing::debug!(
            "Retrieved {} of {} recipes",
            response.data.len(),
            response.meta.total
        );
        Ok(response)
    }

    /// Fetches one full recipe. Billable: costs one credit per call.
    pub async fn get_recipe(&self, id: &str) -> Result<RecipeResponse, RecipeApiError> {
        let endpoint = format!("/api/v1/recipes/{}", urlencoding::encode(id));
        self.get(&endpoint, None).await
    }
}
