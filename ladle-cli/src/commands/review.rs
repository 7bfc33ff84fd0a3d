//! Review commands - rate and comment on prepared recipes

use anyhow::Result;
use clap::Subcommand;
use ladle_core::Review;

use super::{get_context, log_command};
use crate::output;

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// Add or replace a review for a recipe
    Add {
        /// Catalog id of the reviewed recipe
        recipe_id: String,
        /// Difficulty rating, 1 (easy) to 5 (hard)
        #[arg(long)]
        difficulty: u8,
        /// Taste rating, 1 to 5
        #[arg(long)]
        taste: u8,
        /// Date the dish was prepared (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        prepared_on: Option<String>,
        /// Free-form comment
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// List your reviews
    List,
}

pub async fn run(command: ReviewCommands) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "review");

    match command {
        ReviewCommands::Add {
            recipe_id,
            difficulty,
            taste,
            prepared_on,
            comment,
        } => {
            let user = match ctx.users.current_user() {
                Some(user) => user,
                None => {
                    output::warning("Sign in to write reviews.");
                    return Ok(());
                }
            };

            let prepared_on = prepared_on
                .unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());

            let review = Review::new(recipe_id, user.id, prepared_on, difficulty, taste, comment);
            let stored = ctx.reviews.upsert_review(&review)?;

            output::success(&format!("Review saved for recipe {}.", stored.recipe_id));
        }
        ReviewCommands::List => {
            let user = match ctx.users.current_user() {
                Some(user) => user,
                None => {
                    output::warning("Sign in to see your reviews.");
                    return Ok(());
                }
            };

            let written = ctx.reviews.reviews_for_user(&user.id);
            if written.is_empty() {
                println!("You have not reviewed anything yet.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Recipe", "Prepared", "Difficulty", "Taste", "Comment"]);
            for review in &written {
                let name = match ctx.recipes.ensure_cached(&review.recipe_id).await? {
                    Some(recipe) => recipe.name,
                    None => review.recipe_id.clone(),
                };
                table.add_row(vec![
                    name,
                    review.prepared_on.clone(),
                    format!("{}/5", review.difficulty),
                    format!("{}/5", review.taste),
                    review.comment.clone(),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}
