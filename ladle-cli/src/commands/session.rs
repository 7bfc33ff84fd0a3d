//! Register, login and logout commands
//!
//! After a successful registration or login the shell navigates to the
//! profile route and prints the rendered view, mirroring the in-app flow.

use anyhow::Result;
use dialoguer::{Input, Password};
use ladle_core::RegistrationForm;

use super::{get_context, log_command};
use crate::output;

pub async fn run_register(username: Option<String>, email: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "register");

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;
    let confirm_password = Password::new().with_prompt("Confirm password").interact()?;

    let form = RegistrationForm {
        username,
        email,
        password,
        confirm_password,
    };
    let user = ctx.users.register(&form)?;

    output::success(&format!("Welcome, {}.", user.username));
    ctx.router.navigate("#/profile").await;
    output::print_nav(&ctx.router.nav());
    println!("{}", ctx.router.mount());

    Ok(())
}

pub async fn run_login(username: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "login");

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let user = ctx.users.login(&username, &password)?;

    output::success(&format!("Signed in as {}.", user.username));
    ctx.router.navigate("#/profile").await;
    output::print_nav(&ctx.router.nav());
    println!("{}", ctx.router.mount());

    Ok(())
}

pub fn run_logout() -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "logout");

    ctx.users.logout()?;
    output::success("Signed out.");
    Ok(())
}
