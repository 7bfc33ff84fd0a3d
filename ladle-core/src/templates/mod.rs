//! View template fragments - embedded at compile time
//!
//! Each fragment is compiled into the binary using include_str!. The router
//! resolves template references against this table unless a custom template
//! directory is configured.

/// All templates, embedded at compile time.
/// Format: (reference, markup)
pub const TEMPLATES: &[(&str, &str)] = &[
    ("home.html", include_str!("home.html")),
    ("login.html", include_str!("login.html")),
    ("register.html", include_str!("register.html")),
    ("profile.html", include_str!("profile.html")),
    ("search.html", include_str!("search.html")),
    ("cookbook.html", include_str!("cookbook.html")),
    ("reviews.html", include_str!("reviews.html")),
    ("recipes.html", include_str!("recipes.html")),
    ("notfound.html", include_str!("notfound.html")),
    ("error.html", include_str!("error.html")),
];

/// Look up an embedded template by reference
pub fn find(reference: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == reference)
        .map(|(_, body)| *body)
}
