//! Search command - query the catalog and print the matches

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

use super::{get_context, log_command};
use crate::output;

pub async fn run(text: &str, first_letter: bool, ingredient: bool, json: bool) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "search");

    // The ingredient search fans out by-id lookups, so it can take a moment
    let spinner = if json {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Searching the catalog...");
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    };

    let result = if ingredient {
        ctx.recipes.search_by_ingredient(text).await
    } else if first_letter {
        ctx.recipes.search_by_first_letter(text).await
    } else {
        ctx.recipes.search_by_name(text).await
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let results = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No recipes matched.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Category", "Area"]);
    for recipe in &results {
        table.add_row(vec![
            recipe.id.as_str(),
            recipe.name.as_str(),
            recipe.category.as_str(),
            recipe.area.as_str(),
        ]);
    }
    println!("{}", table);

    output::info("Open a recipe with: ladle recipe <id>");
    Ok(())
}
