//! Account commands - inspect and delete the signed-in account

use anyhow::Result;
use clap::Subcommand;
use dialoguer::Confirm;

use super::{get_context, log_command};
use crate::output;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Show the signed-in account
    Show,
    /// Delete the signed-in account, its reviews and the session
    Remove {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

pub fn run(command: AccountCommands) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "account");

    match command {
        AccountCommands::Show => {
            match ctx.users.current_user() {
                Some(user) => {
                    println!("Username: {}", user.username);
                    println!("Email:    {}", user.email);
                    println!("Cookbook: {} entries", user.cookbook.len());
                    println!(
                        "Reviews:  {}",
                        ctx.reviews.reviews_for_user(&user.id).len()
                    );
                }
                None => output::warning("No user is signed in."),
            }
        }
        AccountCommands::Remove { force } => {
            let user = match ctx.users.current_user() {
                Some(user) => user,
                None => {
                    output::warning("No user is signed in.");
                    return Ok(());
                }
            };

            if !force {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete account '{}' and all of its reviews?",
                        user.username
                    ))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            ctx.users.delete_user(&user.id)?;
            output::success("Account deleted.");
        }
    }

    Ok(())
}
