//! Cookbook commands - bookmark recipes with private notes

use anyhow::Result;
use clap::Subcommand;

use super::{get_context, log_command};
use crate::output;

#[derive(Subcommand)]
pub enum CookbookCommands {
    /// List bookmarked recipes
    List,
    /// Bookmark a recipe by catalog id
    Add {
        /// Catalog id (e.g. 52772)
        id: String,
        /// Private note
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Replace the note on a bookmarked recipe
    Note {
        /// Catalog id
        id: String,
        /// New note text
        note: String,
    },
    /// Remove a bookmark
    Remove {
        /// Catalog id
        id: String,
    },
}

pub async fn run(command: CookbookCommands) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "cookbook");

    match command {
        CookbookCommands::List => {
            let user = match ctx.users.current_user() {
                Some(user) => user,
                None => {
                    output::warning("Sign in to see your cookbook.");
                    return Ok(());
                }
            };

            if user.cookbook.is_empty() {
                println!("Your cookbook is empty.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Recipe", "Note"]);
            for entry in &user.cookbook {
                let name = match ctx.recipes.ensure_cached(&entry.meal_id).await? {
                    Some(recipe) => recipe.name,
                    None => "(not in catalog)".to_string(),
                };
                table.add_row(vec![entry.meal_id.as_str(), name.as_str(), entry.note.as_str()]);
            }
            println!("{}", table);
        }
        CookbookCommands::Add { id, note } => {
            ctx.users.bookmark(&id, &note)?;
            output::success(&format!("Added {} to your cookbook.", id));
        }
        CookbookCommands::Note { id, note } => {
            ctx.users.set_note(&id, &note)?;
            output::success("Note updated.");
        }
        CookbookCommands::Remove { id } => {
            ctx.users.unbookmark(&id)?;
            output::success(&format!("Removed {} from your cookbook.", id));
        }
    }

    Ok(())
}
