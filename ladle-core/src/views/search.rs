//! Search view
//!
//! Renders the most recent search results from the in-memory slot; running a
//! search is an interaction handled by the shell, which then refreshes this
//! view.

use crate::domain::result::Result;
use crate::services::RecipeService;
use crate::views::{fill, recipe_list_items};

pub async fn render(template: &str, recipes: &RecipeService) -> Result<String> {
    let results = recipes.last_results();
    let markup = if results.is_empty() {
        "    <li>No results yet. Search by name, first letter or ingredient.</li>".to_string()
    } else {
        recipe_list_items(&results)
    };
    Ok(fill(template, &[("results", &markup)]))
}
