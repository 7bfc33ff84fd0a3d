//! Recipe command - show one recipe by catalog id

use anyhow::Result;
use colored::Colorize;

use super::{get_context, log_command};
use crate::output;

pub async fn run(id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "recipe");

    let recipe = match ctx.recipes.ensure_cached(id).await? {
        Some(recipe) => recipe,
        None => {
            output::warning(&format!("Recipe {} was not found in the catalog.", id));
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    println!("{}", recipe.name.bold());
    println!("{} / {}", recipe.category, recipe.area);
    if !recipe.tags.is_empty() {
        println!("{}", recipe.tags.join(", ").dimmed());
    }
    println!();

    for ingredient in &recipe.ingredients {
        if ingredient.measure.is_empty() {
            println!("  - {}", ingredient.name);
        } else {
            println!("  - {} ({})", ingredient.name, ingredient.measure);
        }
    }
    println!();
    println!("{}", recipe.instructions);

    if !recipe.youtube_url.is_empty() {
        println!();
        println!("Video: {}", recipe.youtube_url);
    }
    if !recipe.source_url.is_empty() {
        println!("Source: {}", recipe.source_url);
    }

    Ok(())
}
