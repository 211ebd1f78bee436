//! `search`: find recipes by keyword.
//!
//! Usage:
//!   recipe-api search --q="chicken"
//!   recipe-api search --q="pasta" --page=2

use std::io::Write;

use crate::args::ArgMap;
use crate::client::{RecipeApiClient, RecipeQuery};
use crate::commands::{browse::DEFAULT_PER_PAGE, render_summary, SummaryDetail};
use crate::format::Terminal;

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    args: &ArgMap,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    let Some(query) = args.get("q").or_else(|| args.get("query")) else {
        return print_usage(term);
    };

    term.header(&format!("Search: \"{}\"", query))?;

    let response = client
        .list_recipes(&RecipeQuery {
            q: Some(query.to_string()),
            page: Some(args.page_or("page", 1)),
            per_page: Some(args.page_or("per_page", DEFAULT_PER_PAGE)),
            ..Default::default()
        })
        .await?;

    if response.data.is_empty() {
        term.line("No recipes found matching your search.\n")?;
        term.line("Try:")?;
        term.line("  * Different keywords")?;
        term.line("  * Broader terms")?;
        term.line("  * Check spelling\n")?;
        return Ok(());
    }

    term.line(format!(
        "Found {} recipes (showing {})\n",
        response.meta.total,
        response.data.len()
    ))?;

    for recipe in &response.data {
        render_summary(term, recipe, SummaryDetail::Brief)?;
    }

    term.line("\n>> Get full recipe: recipe-api recipe --id=<recipe_id>\n")?;
    Ok(())
}

fn print_usage<W: Write, E: Write>(term: &mut Terminal<W, E>) -> anyhow::Result<()> {
    term.line("\nSearch for recipes by keyword\n")?;
    term.line("Usage: recipe-api search --q=\"your search term\"\n")?;
    term.line("Examples:")?;
    term.line("  recipe-api search --q=\"chicken\"")?;
    term.line("  recipe-api search --q=\"quick dinner\"")?;
    term.line("  recipe-api search --q=\"chocolate\" --page=2\n")?;
    Ok(())
}
