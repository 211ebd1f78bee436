//! Type definitions for the recipe-api.com API.
//!
//! These are pure data-transfer shapes mirroring the remote JSON. They are
//! created by decoding a response and never mutated.
//!
//! ## Key Types
//!
//! - [`RecipeSummary`] - Recipe as returned by the list/search endpoints
//! - [`Recipe`] - Full recipe with ingredients, instructions and nutrition
//! - [`ListResponse`] - Paginated envelope for recipes and ingredients
//! - [`DataResponse`] - Unpaginated envelope for the discovery endpoints
//!
//! ## API Compatibility
//!
//! Collections and optional sections default when absent so that a sparse
//! record still decodes. Ingredient quantities arrive either as numbers or
//! as free text (`"to taste"`), see [`Quantity`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Cuisine with the number of recipes tagged with it (`/api/v1/cuisines`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuisine {
    pub name: String,
    pub count: u64,
}

/// Dietary flag with its recipe count (`/api/v1/dietary-flags`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietaryFlag {
    pub name: String,
    pub count: u64,
}

/// Ingredient category with its ingredient count (`/api/v1/ingredient-categories`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCategory {
    pub name: String,
    pub count: u64,
}

/// Ingredient from the ingredient catalogue (`/api/v1/ingredients`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Nutrition data source, e.g. "USDA"
    pub source: String,
}

/// Timing and yield metadata for a recipe.
///
/// Durations are ISO-8601 strings such as `PT1H30M`. `total_time` is expected
/// to be `active_time + passive_time`; this is trusted, not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMeta {
    pub active_time: String,
    pub passive_time: String,
    pub total_time: String,
    #[serde(default)]
    pub overnight_required: bool,
    #[serde(default)]
    pub yields: String,
    #[serde(default)]
    pub yield_count: f64,
    #[serde(default)]
    pub serving_size_g: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietaryInfo {
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub not_suitable_for: Vec<String>,
}

/// Macronutrients per serving, as shown on list items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein_g: f64,
    pub carbohydrates_g: f64,
    pub fat_g: f64,
}

/// Recipe as returned by the browse, search and filter endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub meta: RecipeMeta,
    #[serde(default)]
    pub dietary: DietaryInfo,
    #[serde(default)]
    pub nutrition_summary: NutritionSummary,
}

/// Pagination block of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    /// Set when the API stopped counting past an upper bound
    #[serde(default)]
    pub total_capped: Option<bool>,
}

impl ListMeta {
    /// Number of pages needed to show `total` items, `per_page` at a time.
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }
}

/// Paginated envelope (`/api/v1/recipes`, `/api/v1/ingredients`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

/// Unpaginated envelope used by the discovery endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

pub type RecipeListResponse = ListResponse<RecipeSummary>;
pub type IngredientsResponse = ListResponse<Ingredient>;
pub type CuisinesResponse = DataResponse<Cuisine>;
pub type DietaryFlagsResponse = DataResponse<DietaryFlag>;
pub type IngredientCategoriesResponse = DataResponse<IngredientCategory>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub alternative: Option<String>,
}

/// Ingredient amount: a number for measured items, free text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

/// One line of an ingredient group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientItem {
    pub name: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub preparation: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub substitutions: Vec<String>,
    #[serde(default)]
    pub ingredient_id: String,
    #[serde(default)]
    pub nutrition_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientGroup {
    /// Empty for recipes with a single, unnamed group
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub items: Vec<IngredientItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionStructured {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub temperature: Option<String>,
    /// ISO-8601 duration of the step
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub doneness_cues: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub step_number: u32,
    #[serde(default)]
    pub phase: String,
    pub text: String,
    #[serde(default)]
    pub structured: Option<InstructionStructured>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefrigeratorStorage {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezerStorage {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageInfo {
    #[serde(default)]
    pub refrigerator: Option<RefrigeratorStorage>,
    #[serde(default)]
    pub freezer: Option<FreezerStorage>,
    #[serde(default)]
    pub reheating: Option<String>,
    #[serde(default)]
    pub does_not_keep: Option<bool>,
}

/// Per-serving nutrition on the detail view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPerServing {
    #[serde(flatten)]
    pub summary: NutritionSummary,
    #[serde(default)]
    pub fiber_g: Option<f64>,
    #[serde(default)]
    pub sugar_g: Option<f64>,
    #[serde(default)]
    pub sodium_mg: Option<f64>,
    #[serde(default)]
    pub saturated_fat_g: Option<f64>,
    #[serde(default)]
    pub cholesterol_mg: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullNutrition {
    pub per_serving: NutritionPerServing,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// A complete recipe (`/api/v1/recipes/{id}`).
///
/// Carries `nutrition` in place of the summary's `nutrition_summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub meta: RecipeMeta,
    #[serde(default)]
    pub dietary: DietaryInfo,
    #[serde(default)]
    pub nutrition: FullNutrition,
    #[serde(default)]
    pub storage: Option<StorageInfo>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub ingredients: Vec<IngredientGroup>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    /// Problem to fix, keyed by problem
    #[serde(default)]
    pub troubleshooting: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub chef_notes: Option<Vec<String>>,
    #[serde(default)]
    pub cultural_context: Option<String>,
}

/// Remaining credits, attached to billable responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub monthly_remaining: u64,
    #[serde(default)]
    pub monthly_limit: u64,
    pub daily_remaining: u64,
    #[serde(default)]
    pub daily_limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub data: Recipe,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Error envelope the API returns alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}
