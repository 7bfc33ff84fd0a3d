//! Cookbook view

use crate::domain::result::{Error, Result};
use crate::services::{RecipeService, UserService};
use crate::views::{escape, fill};

pub async fn render(
    template: &str,
    users: &UserService,
    recipes: &RecipeService,
) -> Result<String> {
    let user = users
        .current_user()
        .ok_or_else(|| Error::not_found("no user is signed in"))?;

    if user.cookbook.is_empty() {
        return Ok(fill(
            template,
            &[("entries", "    <li>Your cookbook is empty.</li>")],
        ));
    }

    let mut items = Vec::new();
    for entry in &user.cookbook {
        // A cache/catalog miss still shows the bookmark, by raw id
        let title = match recipes.ensure_cached(&entry.meal_id).await? {
            Some(recipe) => escape(&recipe.name),
            None => format!("Recipe {}", escape(&entry.meal_id)),
        };

        let note = if entry.note.is_empty() {
            String::new()
        } else {
            format!("<blockquote>{}</blockquote>", escape(&entry.note))
        };

        items.push(format!(
            "    <li><a href=\"#/recipe/{}\">{}</a>{}</li>",
            escape(&entry.meal_id),
            title,
            note
        ));
    }

    Ok(fill(template, &[("entries", &items.join("\n"))]))
}
