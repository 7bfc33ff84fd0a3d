//! Login and register views
//!
//! Both fragments are static forms; the submission logic lives in the user
//! service and is driven by the shell.

use crate::domain::result::Result;

pub async fn render_login(template: &str) -> Result<String> {
    Ok(template.to_string())
}

pub async fn render_register(template: &str) -> Result<String> {
    Ok(template.to_string())
}
