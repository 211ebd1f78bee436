//! `recipe`: fetch and print one complete recipe.
//!
//! This endpoint is billable: every call costs one credit.

use std::io::Write;

use crate::args::ArgMap;
use crate::client::{Recipe, RecipeApiClient, RecipeApiError, StorageInfo, Usage};
use crate::format::{format_count, format_duration, round_whole, Terminal};

pub async fn run<W: Write, E: Write>(
    client: &RecipeApiClient,
    args: &ArgMap,
    term: &mut Terminal<W, E>,
) -> anyhow::Result<()> {
    let Some(recipe_id) = args.get("id") else {
        return print_usage(term);
    };

    term.warning("\n!! Fetching full recipe (costs 1 credit) ...\n")?;

    let response = match client.get_recipe(recipe_id).await {
        Ok(response) => response,
        Err(RecipeApiError::NotFound) => {
            tracing::info!("Recipe {} does not exist", recipe_id);
            term.error_line(format!("\n[X] Recipe not found: {}\n", recipe_id))?;
            term.error_line("Make sure the ID is correct. Find IDs with:")?;
            term.error_line("  recipe-api browse")?;
            term.error_line("  recipe-api search --q=\"...\"\n")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    render_recipe(term, &response.data)?;

    if let Some(usage) = &response.usage {
        render_usage(term, usage)?;
    }

    term.blank()?;
    Ok(())
}

fn render_recipe<W: Write, E: Write>(
    term: &mut Terminal<W, E>,
    recipe: &Recipe,
) -> std::io::Result<()> {
    term.header(&recipe.name)?;
    term.line(&recipe.description)?;
    term.blank()?;

    // Overview
    term.label("Category", format!("{} | {}", recipe.category, recipe.cuisine))?;
    term.label("Difficulty", &recipe.difficulty)?;
    term.label("Active time", format_duration(&recipe.meta.active_time))?;
    term.label("Passive time", format_duration(&recipe.meta.passive_time))?;
    term.label("Total time", format_duration(&recipe.meta.total_time))?;
    term.label("Yields", &recipe.meta.yields)?;
    if !recipe.dietary.flags.is_empty() {
        term.label("Dietary", recipe.dietary.flags.join(", "))?;
    }
    if recipe.meta.overnight_required {
        term.warning("  ** Requires overnight preparation **")?;
    }

    // Nutrition
    let nutrition = &recipe.nutrition.per_serving;
    term.blank()?;
    term.subheader("Nutrition (per serving)")?;
    term.label("Calories", format!("{} kcal", round_whole(nutrition.summary.calories)))?;
    term.label("Protein", format!("{}g", round_whole(nutrition.summary.protein_g)))?;
    term.label("Carbs", format!("{}g", round_whole(nutrition.summary.carbohydrates_g)))?;
    term.label("Fat", format!("{}g", round_whole(nutrition.summary.fat_g)))?;
    if let Some(fiber) = nutrition.fiber_g.filter(|g| *g != 0.0) {
        term.label("Fiber", format!("{}g", round_whole(fiber)))?;
    }

    if !recipe.equipment.is_empty() {
        term.blank()?;
        term.subheader("Equipment")?;
        for item in &recipe.equipment {
            let alt = item
                .alternative
                .as_deref()
                .filter(|a| !a.is_empty())
                .map(|a| format!(" (or: {})", a))
                .unwrap_or_default();
            let optional = if item.required { "" } else { " [optional]" };
            term.line(format!("  * {}{}{}", item.name, alt, optional))?;
        }
    }

    term.blank()?;
    term.subheader("Ingredients")?;
    for group in &recipe.ingredients {
        if !group.group_name.is_empty() {
            term.line(format!("\n  [{}]", group.group_name))?;
        }
        for ing in &group.items {
            let amount = match non_empty(&ing.unit) {
                Some(unit) => format!("{} {}", ing.quantity, unit),
                None => ing.quantity.to_string(),
            };
            let prep = non_empty(&ing.preparation)
                .map(|p| format!(", {}", p))
                .unwrap_or_default();
            let notes = non_empty(&ing.notes)
                .map(|n| format!(" ({})", n))
                .unwrap_or_default();
            term.line(format!("  * {} {}{}{}", amount, ing.name, prep, notes))?;
        }
    }

    term.blank()?;
    term.subheader("Instructions")?;
    for step in &recipe.instructions {
        let duration = step
            .structured
            .as_ref()
            .and_then(|s| non_empty(&s.duration))
            .map(|d| format!(" {}", term.highlight(&format!("[{}]", format_duration(d)))))
            .unwrap_or_default();
        term.line(format!(
            "\n  {}. [{}] {}{}",
            step.step_number, step.phase, step.text, duration
        ))?;

        for tip in &step.tips {
            term.line(format!("     >> {}", tip))?;
        }
    }

    if let Some(notes) = recipe.chef_notes.as_ref().filter(|n| !n.is_empty()) {
        term.blank()?;
        term.subheader("Chef Notes")?;
        for note in notes {
            term.line(format!("  * {}", note))?;
        }
    }

    if let Some(context) = non_empty(&recipe.cultural_context) {
        term.blank()?;
        term.subheader("About This Dish")?;
        term.line(format!("  {}", context))?;
    }

    if let Some(storage) = &recipe.storage {
        render_storage(term, storage)?;
    }

    if let Some(fixes) = recipe.troubleshooting.as_ref().filter(|t| !t.is_empty()) {
        term.blank()?;
        term.subheader("Troubleshooting")?;
        for (problem, fix) in fixes {
            term.line(format!("  * {}: {}", problem, fix))?;
        }
    }

    Ok(())
}

fn render_storage<W: Write, E: Write>(
    term: &mut Terminal<W, E>,
    storage: &StorageInfo,
) -> std::io::Result<()> {
    term.blank()?;
    term.subheader("Storage")?;
    if storage.does_not_keep.unwrap_or(false) {
        term.line("  Best eaten immediately.")?;
    }
    if let Some(fridge) = &storage.refrigerator {
        let detail = if fridge.notes.is_empty() {
            &fridge.duration
        } else {
            &fridge.notes
        };
        term.line(format!("  Refrigerator: {}", detail))?;
    }
    if let Some(duration) = storage.freezer.as_ref().and_then(|f| non_empty(&f.duration)) {
        term.line(format!("  Freezer: {}", duration))?;
    }
    if let Some(reheating) = non_empty(&storage.reheating) {
        term.line(format!("  Reheating: {}", reheating))?;
    }
    Ok(())
}

fn render_usage<W: Write, E: Write>(
    term: &mut Terminal<W, E>,
    usage: &Usage,
) -> std::io::Result<()> {
    term.line("\n--- API Usage ---")?;
    term.line(format!("Monthly remaining: {}", format_count(usage.monthly_remaining)))?;
    term.line(format!("Daily remaining:   {}", format_count(usage.daily_remaining)))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn print_usage<W: Write, E: Write>(term: &mut Terminal<W, E>) -> anyhow::Result<()> {
    term.line("\nGet full recipe details\n")?;
    term.warning("!! Note: This endpoint costs 1 credit per request !!\n")?;
    term.line("Usage: recipe-api recipe --id=<recipe_id>\n")?;
    term.line("To find recipe IDs:")?;
    term.line("  1. Run `recipe-api browse` or `recipe-api search`")?;
    term.line("  2. Copy the ID from a recipe you want\n")?;
    Ok(())
}
