//! CLI command implementations

pub mod account;
pub mod cookbook;
pub mod demo;
pub mod logs;
pub mod open;
pub mod recipe;
pub mod review;
pub mod search;
pub mod session;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use ladle_core::LadleContext;

/// Get the ladle directory from environment or default
pub fn get_ladle_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LADLE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".ladle")
    }
}

/// Get or create the ladle context
pub fn get_context() -> Result<LadleContext> {
    let ladle_dir = get_ladle_dir();

    std::fs::create_dir_all(&ladle_dir)
        .with_context(|| format!("Failed to create ladle directory: {:?}", ladle_dir))?;

    LadleContext::new(&ladle_dir).context("Failed to initialize ladle context")
}

/// Log a command execution, ignoring any errors (logging never breaks the app)
pub fn log_command(ctx: &LadleContext, command: &str) {
    if let Some(logger) = &ctx.logger {
        let _ = logger.log_command(command);
    }
}
