//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use ladle_core::NavLink;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Print the navigation bar with the active section highlighted
pub fn print_nav(links: &[NavLink]) {
    let rendered: Vec<String> = links
        .iter()
        .map(|link| {
            if link.active {
                link.label.bold().green().to_string()
            } else {
                link.label.normal().to_string()
            }
        })
        .collect();
    println!("{}", rendered.join("  |  "));
    println!();
}
