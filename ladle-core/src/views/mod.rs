//! View controllers
//!
//! One module per view. Each controller reads through the services, fills
//! the `{{placeholder}}` slots of its template fragment and returns the
//! final markup for the mount point. Controllers never write the mount
//! themselves; the router owns it.

pub mod auth;
pub mod cookbook;
pub mod home;
pub mod profile;
pub mod recipe;
pub mod reviews;
pub mod search;

use crate::domain::Recipe;

/// Replace `{{name}}` placeholders in a template fragment
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

/// Escape user-provided text for injection into markup
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a recipe collection as list items
pub(crate) fn recipe_list_items(recipes: &[Recipe]) -> String {
    recipes
        .iter()
        .map(|r| {
            format!(
                "    <li><a href=\"#/recipe/{}\">{}</a> <em>{} / {}</em></li>",
                escape(&r.id),
                escape(&r.name),
                escape(&r.category),
                escape(&r.area),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_all_occurrences() {
        let out = fill("<p>{{a}} and {{a}} or {{b}}</p>", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "<p>x and x or y</p>");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }
}
