//! `ingredient-categories`: list ingredient categories by size.

use std::io::Write;

use crate::client::RecipeApiClient;
use crate::commands::LIST_LIMIT;
use crate::format::{format_count, Terminal};

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    term.header("Ingredient Categories")?;

    let response = client.list_ingredient_categories().await?;

    term.line(format!(
        "Found {} ingredient categories:\n",
        response.data.len()
    ))?;

    let mut categories = response.data;
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    for category in categories.iter().take(LIST_LIMIT) {
        term.list_item(
            &format!("{} ({} ingredients)", category.name, format_count(category.count)),
            1,
        )?;
    }

    if categories.len() > LIST_LIMIT {
        term.line(format!("  ... and {} more", categories.len() - LIST_LIMIT))?;
    }

    term.divider()?;
    term.line("\n>> Next step: Run `recipe-api ingredients` to browse ingredients\n")?;
    Ok(())
}
