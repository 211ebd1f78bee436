//! `filter`: combine several recipe filters in one query.
//!
//! Usage:
//!   recipe-api filter --category="Breakfast"
//!   recipe-api filter --cuisine="Italian" --difficulty="Intermediate"
//!   recipe-api filter --dietary="Vegetarian" --max_calories=500
//!   recipe-api filter --ingredients="<id1>,<id2>"

use std::io::Write;

use crate::args::ArgMap;
use crate::client::{RecipeApiClient, RecipeQuery};
use crate::commands::{browse::DEFAULT_PER_PAGE, render_summary, SummaryDetail};
use crate::format::Terminal;

/// Flags that count as filters, in the order they are documented.
pub const FILTER_KEYS: [&str; 7] = [
    "category",
    "cuisine",
    "difficulty",
    "dietary",
    "ingredients",
    "max_calories",
    "min_protein",
];

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    args: &ArgMap,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    if !FILTER_KEYS.iter().any(|key| args.contains(key)) {
        return print_usage(term);
    }

    term.header("Filtered Recipes")?;
    term.line(format!("Filters: {}\n", describe_filters(args)))?;

    let query = RecipeQuery {
        category: args.get("category").map(str::to_string),
        cuisine: args.get("cuisine").map(str::to_string),
        difficulty: args.get("difficulty").map(str::to_string),
        dietary: args.get("dietary").map(str::to_string),
        ingredients: args.get("ingredients").map(str::to_string),
        max_calories: numeric_filter(args, "max_calories"),
        min_protein: numeric_filter(args, "min_protein"),
        page: Some(args.page_or("page", 1)),
        per_page: Some(args.page_or("per_page", DEFAULT_PER_PAGE)),
        ..Default::default()
    };

    let response = client.list_recipes(&query).await?;

    if response.data.is_empty() {
        term.line("No recipes match your filters.\n")?;
        term.line("Try relaxing some criteria.\n")?;
        return Ok(());
    }

    term.line(format!("Found {} matching recipes\n", response.meta.total))?;

    for recipe in &response.data {
        render_summary(term, recipe, SummaryDetail::Full)?;
    }

    term.line("\n>> Get full recipe: recipe-api recipe --id=<recipe_id>\n")?;
    Ok(())
}

/// `key=value` pairs of the filter flags, in the order they were given.
pub fn describe_filters(args: &ArgMap) -> String {
    args.iter()
        .filter(|(key, _)| FILTER_KEYS.contains(key))
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn numeric_filter(args: &ArgMap, key: &str) -> Option<i64> {
    let raw = args.get(key)?;
    let value = args.get_int(key);
    if value.is_none() {
        tracing::warn!("Ignoring non-numeric --{}={}", key, raw);
    }
    value
}

fn print_usage<W: Write, E: Write>(term: &mut Terminal<W, E>) -> anyhow::Result<()> {
    term.line("\nFilter recipes by multiple criteria\n")?;
    term.line("Available filters:")?;
    term.line("  --category     Recipe category (Breakfast, Main, Dessert, etc.)")?;
    term.line("  --cuisine      Cuisine type (run `recipe-api cuisines` for list)")?;
    term.line("  --difficulty   Beginner, Intermediate, or Advanced")?;
    term.line("  --dietary      Vegetarian, Vegan, Gluten-Free, etc. (run `recipe-api categories`)")?;
    term.line("  --ingredients  Comma-separated ingredient IDs (run `recipe-api ingredients`)")?;
    term.line("  --max_calories Maximum calories per serving")?;
    term.line("  --min_protein  Minimum protein in grams\n")?;
    term.line("Examples:")?;
    term.line("  recipe-api filter --cuisine=\"Italian\" --difficulty=\"Beginner\"")?;
    term.line("  recipe-api filter --dietary=\"Vegan\" --max_calories=400")?;
    term.line("  recipe-api filter --category=\"Dessert\" --cuisine=\"French\"\n")?;
    Ok(())
}
