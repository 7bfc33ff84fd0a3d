//! Ladle CLI - browse, search and bookmark recipes in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod output;

use commands::{account, cookbook, demo, logs, open, recipe, review, search, session, status};

/// Ladle - recipes in your terminal
#[derive(Parser)]
#[command(name = "ladle", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a location (e.g. "#/home" or "#/recipe/52772") and print the view
    Open {
        /// Location identifier; defaults to the home view
        location: Option<String>,
    },

    /// Create an account and sign in
    Register {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
        /// Email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign in
    Login {
        /// Username (prompted when omitted)
        username: Option<String>,
    },

    /// Sign out
    Logout,

    /// Search the recipe catalog
    Search {
        /// Search text (name by default)
        text: String,
        /// Match recipes by first letter instead of name
        #[arg(long, conflicts_with = "ingredient")]
        first_letter: bool,
        /// Match recipes by ingredient instead of name
        #[arg(long)]
        ingredient: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a recipe by catalog id
    Recipe {
        /// Catalog id (e.g. 52772)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the personal cookbook
    Cookbook {
        #[command(subcommand)]
        command: cookbook::CookbookCommands,
    },

    /// Write and list reviews
    Review {
        #[command(subcommand)]
        command: review::ReviewCommands,
    },

    /// Manage the signed-in account
    Account {
        #[command(subcommand)]
        command: account::AccountCommands,
    },

    /// Show local data status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },

    /// Manage demo mode (offline canned catalog)
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Open { location } => open::run(location).await,
        Commands::Register { username, email } => session::run_register(username, email).await,
        Commands::Login { username } => session::run_login(username).await,
        Commands::Logout => session::run_logout(),
        Commands::Search {
            text,
            first_letter,
            ingredient,
            json,
        } => search::run(&text, first_letter, ingredient, json).await,
        Commands::Recipe { id, json } => recipe::run(&id, json).await,
        Commands::Cookbook { command } => cookbook::run(command).await,
        Commands::Review { command } => review::run(command).await,
        Commands::Account { command } => account::run(command),
        Commands::Status { json } => status::run(json),
        Commands::Logs { command } => logs::run(command),
        Commands::Demo { command } => demo::run(command),
    }
}
