//! Reviews view - the signed-in user's written reviews

use crate::domain::result::{Error, Result};
use crate::services::{RecipeService, ReviewService, UserService};
use crate::views::{escape, fill};

pub async fn render(
    template: &str,
    users: &UserService,
    reviews: &ReviewService,
    recipes: &RecipeService,
) -> Result<String> {
    let user = users
        .current_user()
        .ok_or_else(|| Error::not_found("no user is signed in"))?;

    let written = reviews.reviews_for_user(&user.id);
    if written.is_empty() {
        return Ok(fill(
            template,
            &[("entries", "    <li>You have not reviewed anything yet.</li>")],
        ));
    }

    let mut items = Vec::new();
    for review in &written {
        let title = match recipes.ensure_cached(&review.recipe_id).await? {
            Some(recipe) => escape(&recipe.name),
            None => format!("Recipe {}", escape(&review.recipe_id)),
        };

        let comment = if review.comment.is_empty() {
            String::new()
        } else {
            format!("<blockquote>{}</blockquote>", escape(&review.comment))
        };

        items.push(format!(
            "    <li><a href=\"#/recipe/{}\">{}</a> prepared {} \
             <em>difficulty {}/5, taste {}/5</em>{}</li>",
            escape(&review.recipe_id),
            title,
            escape(&review.prepared_on),
            review.difficulty,
            review.taste,
            comment
        ));
    }

    Ok(fill(template, &[("entries", &items.join("\n"))]))
}
