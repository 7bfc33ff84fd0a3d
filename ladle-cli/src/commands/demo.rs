//! Demo command - toggle the offline canned catalog

use anyhow::Result;
use clap::Subcommand;
use ladle_core::config::Config;

use super::get_ladle_dir;
use crate::output;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    On,
    /// Disable demo mode
    Off,
    /// Show whether demo mode is enabled
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let ladle_dir = get_ladle_dir();
    std::fs::create_dir_all(&ladle_dir)?;
    let mut config = Config::load(&ladle_dir)?;

    match command.unwrap_or(DemoCommands::Status) {
        DemoCommands::On => {
            config.enable_demo_mode();
            config.save(&ladle_dir)?;
            output::success("Demo mode enabled.");
            output::info("Demo data lives in its own database; your data is untouched.");
        }
        DemoCommands::Off => {
            config.disable_demo_mode();
            config.save(&ladle_dir)?;
            output::success("Demo mode disabled.");
        }
        DemoCommands::Status => {
            if config.demo_mode {
                println!("Demo mode is on");
            } else {
                println!("Demo mode is off");
            }
        }
    }

    Ok(())
}
