//! `cuisines`: list cuisines with a bar proportional to their recipe count.

use std::io::Write;

use crate::client::RecipeApiClient;
use crate::format::{cuisine_bar, Terminal};

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    term.header("Available Cuisines")?;

    let response = client.list_cuisines().await?;

    term.line(format!("Found {} cuisines:\n", response.data.len()))?;

    let mut cuisines = response.data;
    cuisines.sort_by(|a, b| b.count.cmp(&a.count));

    for cuisine in &cuisines {
        term.line(format!(
            "  {:<20} {} {}",
            cuisine.name,
            cuisine_bar(cuisine.count),
            cuisine.count
        ))?;
    }

    term.divider()?;
    term.line("\n>> Next step: Run `recipe-api browse` to see recipes\n")?;
    Ok(())
}
