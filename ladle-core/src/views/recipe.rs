//! Recipe browse and detail view
//!
//! Handles both `#/recipe` (browse the locally cached recipes) and
//! `#/recipe/<id>` (detail). Detail loads through the cache-or-fetch path;
//! an id the catalog cannot resolve renders a not-found message inside the
//! view rather than failing the transition.

use crate::domain::result::Result;
use crate::domain::Recipe;
use crate::services::RecipeService;
use crate::views::{escape, fill, recipe_list_items};

pub async fn render(
    template: &str,
    recipes: &RecipeService,
    param: Option<&str>,
) -> Result<String> {
    let content = match param {
        Some(id) => match recipes.ensure_cached(id).await? {
            Some(recipe) => detail_markup(&recipe),
            None => format!(
                "  <p>Recipe {} was not found in the catalog.</p>",
                escape(id)
            ),
        },
        None => browse_markup(&recipes.cached_recipes()),
    };

    Ok(fill(template, &[("content", &content)]))
}

fn browse_markup(cached: &[Recipe]) -> String {
    if cached.is_empty() {
        return "  <p>No recipes cached yet. Open a recipe or run a search.</p>".to_string();
    }
    format!("  <ul class=\"results\">\n{}\n  </ul>", recipe_list_items(cached))
}

fn detail_markup(recipe: &Recipe) -> String {
    let mut out = String::new();

    out.push_str(&format!("  <h1>{}</h1>\n", escape(&recipe.name)));
    out.push_str(&format!(
        "  <p class=\"meta\">{} / {}</p>\n",
        escape(&recipe.category),
        escape(&recipe.area)
    ));

    if !recipe.tags.is_empty() {
        let tags: Vec<String> = recipe.tags.iter().map(|t| escape(t)).collect();
        out.push_str(&format!("  <p class=\"tags\">{}</p>\n", tags.join(", ")));
    }

    out.push_str("  <ul class=\"ingredients\">\n");
    for ingredient in &recipe.ingredients {
        if ingredient.measure.is_empty() {
            out.push_str(&format!("    <li>{}</li>\n", escape(&ingredient.name)));
        } else {
            out.push_str(&format!(
                "    <li>{} ({})</li>\n",
                escape(&ingredient.name),
                escape(&ingredient.measure)
            ));
        }
    }
    out.push_str("  </ul>\n");

    out.push_str(&format!(
        "  <p class=\"instructions\">{}</p>\n",
        escape(&recipe.instructions)
    ));

    if !recipe.youtube_url.is_empty() {
        out.push_str(&format!(
            "  <p><a href=\"{}\">Watch on YouTube</a></p>\n",
            escape(&recipe.youtube_url)
        ));
    }
    if !recipe.source_url.is_empty() {
        out.push_str(&format!(
            "  <p><a href=\"{}\">Original source</a></p>\n",
            escape(&recipe.source_url)
        ));
    }

    out
}
