//! Home view

use crate::domain::result::Result;
use crate::services::UserService;
use crate::views::{escape, fill};

pub async fn render(template: &str, users: &UserService) -> Result<String> {
    let greeting = match users.current_user() {
        Some(user) => format!("Welcome back, {}.", escape(&user.username)),
        None => "Welcome. Sign in to keep a cookbook and write reviews.".to_string(),
    };
    Ok(fill(template, &[("greeting", &greeting)]))
}
