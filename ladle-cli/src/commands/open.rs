//! Open command - run a route transition and print the rendered view

use anyhow::Result;
use ladle_core::{Transition, DEFAULT_LOCATION};

use super::{get_context, log_command};
use crate::output;

pub async fn run(location: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "open");

    let location = location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let transition = ctx.router.navigate(&location).await;

    output::print_nav(&ctx.router.nav());
    println!("{}", ctx.router.mount());

    match transition {
        Transition::Rendered(_) => {}
        Transition::NotFound => output::warning("No route matched that location."),
        Transition::Failed => output::warning("The view failed to load; see the logs."),
    }

    Ok(())
}
