//! `ingredients`: browse and search the ingredient catalogue.
//!
//! Ingredient IDs shown here can be passed to `filter --ingredients`.

use std::io::Write;

use crate::args::ArgMap;
use crate::client::{IngredientQuery, RecipeApiClient};
use crate::format::{format_count, Terminal};

pub const DEFAULT_PER_PAGE: u32 = 20;

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    args: &ArgMap,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    let query = IngredientQuery {
        q: args.get("q").map(str::to_string),
        category: args.get("category").map(str::to_string),
        page: Some(args.page_or("page", 1)),
        per_page: Some(args.page_or("per_page", DEFAULT_PER_PAGE)),
    };

    term.header("Browse Ingredients")?;

    if let Some(q) = &query.q {
        term.line(format!("Search: \"{}\"", q))?;
    }
    if let Some(category) = &query.category {
        term.line(format!("Category: {}", category))?;
    }
    term.blank()?;

    let response = client.list_ingredients(&query).await?;

    term.line(format!(
        "Found {} ingredients (page {}):\n",
        format_count(response.meta.total),
        response.meta.page
    ))?;

    for ingredient in &response.data {
        term.line(format!("  {}", ingredient.name))?;
        term.line(format!("    ID: {}", ingredient.id))?;
        term.line(format!("    Category: {}", ingredient.category))?;
        term.line(format!("    Source: {}", ingredient.source))?;
        term.blank()?;
    }

    term.divider()?;

    term.line("\nUsage examples:")?;
    term.line("  recipe-api ingredients --q=\"chicken\"")?;
    term.line("  recipe-api ingredients --category=\"Vegetables\"")?;
    term.line("  recipe-api ingredients --page=2")?;
    term.line("\nUse ingredient IDs to filter recipes:")?;
    term.line("  recipe-api filter --ingredients=\"<id1>,<id2>\"\n")?;
    Ok(())
}
