//! # Endpoint Commands
//!
//! One command per API resource. Each reads its flags, prints usage and
//! returns early when a required flag is missing, otherwise calls the client
//! once and renders the result.
//!
//! Commands return `anyhow::Result`; a [`RecipeApiError`](crate::RecipeApiError)
//! inside the error is left for the entry point to report.

use std::io::Write;

use clap::{Args, Parser, Subcommand};

use crate::args::ArgMap;
use crate::client::{RecipeApiClient, RecipeSummary};
use crate::format::{format_duration, round_whole, truncate, Terminal};

pub mod browse;
pub mod cuisines;
pub mod dietary_flags;
pub mod filter;
pub mod ingredient_categories;
pub mod ingredients;
pub mod recipe;
pub mod search;

/// Discovery lists show this many entries before collapsing the rest.
pub(crate) const LIST_LIMIT: usize = 20;

const DESCRIPTION_WIDTH: usize = 80;

/// Command line of the `recipe-api` binary.
#[derive(Parser, Debug)]
#[command(name = "recipe-api")]
#[command(version, about = "Browse recipe-api.com from the terminal", long_about = None)]
#[command(after_help = "Set RECIPE_API_KEY (or add it to .env) before running a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Loose `--key=value` flags handed to a command unparsed.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagArgs {
    #[arg(
        value_name = "--KEY=VALUE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub flags: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List dietary flags
    Categories(FlagArgs),
    /// List cuisines
    Cuisines(FlagArgs),
    /// Browse recipes page by page
    Browse(FlagArgs),
    /// Search recipes by keyword
    Search(FlagArgs),
    /// Filter recipes by category, cuisine, diet and nutrition
    Filter(FlagArgs),
    /// Show one full recipe (costs 1 credit)
    Recipe(FlagArgs),
    /// List ingredient categories
    IngredientCategories(FlagArgs),
    /// Browse and search ingredients
    Ingredients(FlagArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Categories(_) => "categories",
            Command::Cuisines(_) => "cuisines",
            Command::Browse(_) => "browse",
            Command::Search(_) => "search",
            Command::Filter(_) => "filter",
            Command::Recipe(_) => "recipe",
            Command::IngredientCategories(_) => "ingredient-categories",
            Command::Ingredients(_) => "ingredients",
        }
    }

    /// The flags given after the command name, parsed into an [`ArgMap`].
    pub fn args(&self) -> ArgMap {
        let flags = match self {
            Command::Categories(a)
            | Command::Cuisines(a)
            | Command::Browse(a)
            | Command::Search(a)
            | Command::Filter(a)
            | Command::Recipe(a)
            | Command::IngredientCategories(a)
            | Command::Ingredients(a) => &a.flags,
        };
        ArgMap::parse(flags)
    }

    pub async fn run<W: Write, E: Write>(
        &self,
        client: &RecipeApiClient,
        term: &mut Terminal<W, E>,
    ) -> anyhow::Result<()> {
        tracing::info!("Running command: {}", self.name());
        let args = self.args();

        match self {
            Command::Categories(_) => dietary_flags::run(client, term).await,
            Command::Cuisines(_) => cuisines::run(client, term).await,
            Command::Browse(_) => browse::run(client, &args, term).await,
            Command::Search(_) => search::run(client, &args, term).await,
            Command::Filter(_) => filter::run(client, &args, term).await,
            Command::Recipe(_) => recipe::run(client, &args, term).await,
            Command::IngredientCategories(_) => ingredient_categories::run(client, term).await,
            Command::Ingredients(_) => ingredients::run(client, &args, term).await,
        }
    }
}

/// How much of a recipe summary to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SummaryDetail {
    /// Identity, category, time and calories
    Brief,
    /// Brief plus difficulty and dietary flags
    Full,
}

/// Renders one entry of a recipe list, followed by a divider.
pub(crate) fn render_summary<W: Write, E: Write>(
    term: &mut Terminal<W, E>,
    recipe: &RecipeSummary,
    detail: SummaryDetail,
) -> std::io::Result<()> {
    let name = term.highlight(&recipe.name);
    term.line(name)?;
    term.label("ID", &recipe.id)?;
    term.label("Category", format!("{} | {}", recipe.category, recipe.cuisine))?;
    if detail == SummaryDetail::Full {
        term.label("Difficulty", &recipe.difficulty)?;
    }
    term.label("Time", format_duration(&recipe.meta.total_time))?;
    if detail == SummaryDetail::Full && !recipe.dietary.flags.is_empty() {
        let flags: Vec<&str> = recipe.dietary.flags.iter().take(4).map(String::as_str).collect();
        term.label("Dietary", flags.join(", "))?;
    }
    term.label(
        "Calories",
        format!("{} kcal", round_whole(recipe.nutrition_summary.calories)),
    )?;
    term.line(format!("  {}", truncate(&recipe.description, DESCRIPTION_WIDTH)))?;
    term.divider()
}
