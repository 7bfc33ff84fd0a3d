//! Profile view

use crate::domain::result::{Error, Result};
use crate::services::{ReviewService, UserService};
use crate::views::{escape, fill};

pub async fn render(
    template: &str,
    users: &UserService,
    reviews: &ReviewService,
) -> Result<String> {
    // The router's authorization gate guarantees a session here
    let user = users
        .current_user()
        .ok_or_else(|| Error::not_found("no user is signed in"))?;

    let review_count = reviews.reviews_for_user(&user.id).len();

    Ok(fill(
        template,
        &[
            ("username", &escape(&user.username)),
            ("email", &escape(&user.email)),
            ("cookbookCount", &user.cookbook.len().to_string()),
            ("reviewCount", &review_count.to_string()),
        ],
    ))
}
