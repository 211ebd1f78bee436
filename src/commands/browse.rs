//! `browse`: page through recipes without fetching full details.
//!
//! Usage:
//!   recipe-api browse
//!   recipe-api browse --page=2
//!   recipe-api browse --per_page=5

use std::io::Write;

use crate::args::ArgMap;
use crate::client::{RecipeApiClient, RecipeQuery};
use crate::commands::{render_summary, SummaryDetail};
use crate::format::Terminal;

pub const DEFAULT_PER_PAGE: u32 = 10;

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    args: &ArgMap,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    let query = RecipeQuery {
        page: Some(args.page_or("page", 1)),
        per_page: Some(args.page_or("per_page", DEFAULT_PER_PAGE)),
        ..Default::default()
    };

    term.header("Browse Recipes")?;

    let response = client.list_recipes(&query).await?;
    let meta = &response.meta;

    term.line(format!(
        "Page {} of {} ({} total recipes)\n",
        meta.page,
        meta.total_pages(),
        meta.total
    ))?;

    for recipe in &response.data {
        render_summary(term, recipe, SummaryDetail::Full)?;
    }

    term.line("\n>> Tips:")?;
    term.line("   * Browse more: recipe-api browse --page=2")?;
    term.line("   * Search: recipe-api search --q=\"pasta\"")?;
    term.line("   * Get full recipe: recipe-api recipe --id=<recipe_id>\n")?;
    Ok(())
}
