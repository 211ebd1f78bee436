//! `categories`: list the dietary flags recipes can be filtered by.

use std::io::Write;

use crate::client::RecipeApiClient;
use crate::commands::LIST_LIMIT;
use crate::format::Terminal;

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    term.header("Dietary Flags")?;

    let response = client.list_dietary_flags().await?;

    term.line(format!("Found {} dietary options:\n", response.data.len()))?;

    let mut flags = response.data;
    flags.sort_by(|a, b| b.count.cmp(&a.count));

    for flag in flags.iter().take(LIST_LIMIT) {
        term.list_item(&format!("{} ({} recipes)", flag.name, flag.count), 1)?;
    }

    if flags.len() > LIST_LIMIT {
        term.line(format!("  ... and {} more", flags.len() - LIST_LIMIT))?;
    }

    term.divider()?;
    term.line("\n>> Next step: Run `recipe-api cuisines` to see available cuisines\n")?;
    Ok(())
}
