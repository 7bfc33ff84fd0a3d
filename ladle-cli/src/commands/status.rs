//! Status command - show local data summary

use anyhow::Result;
use colored::Colorize;

use super::{get_context, log_command};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "status");

    let users = ctx.users.list_users();
    let reviews = ctx.reviews.list_reviews();
    let cached = ctx.recipes.cached_count();
    let session = ctx.users.current_user();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "users": users.len(),
                "reviews": reviews.len(),
                "cachedRecipes": cached,
                "currentUser": session.as_ref().map(|u| u.username.clone()),
                "catalog": ctx.recipes.catalog_name(),
                "demoMode": ctx.config.demo_mode,
            })
        );
        return Ok(());
    }

    println!("{}", "Local Data Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Users", &users.len().to_string()]);
    table.add_row(vec!["Reviews", &reviews.len().to_string()]);
    table.add_row(vec!["Cached recipes", &cached.to_string()]);
    table.add_row(vec!["Catalog", ctx.recipes.catalog_name()]);
    println!("{}", table);
    println!();

    match session {
        Some(user) => println!("Signed in as {}", user.username.green()),
        None => println!("Not signed in"),
    }
    if ctx.config.demo_mode {
        output::warning("Demo mode is on: the catalog is canned and offline.");
    }

    Ok(())
}
