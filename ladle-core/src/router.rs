//! Hash-style router
//!
//! A state machine over one variable: the current location identifier (a
//! slash-delimited string prefixed with the `#` navigation marker, e.g.
//! `#/recipe/52772`). Transitions are driven externally by location changes.
//! Each transition normalizes the identifier, matches it against the static
//! route table, enforces the authorization gate, loads the view template
//! through a permanent cache and invokes the view, writing the result into
//! the single mount point.
//!
//! Transitions are not reentrant-safe: two transitions whose asynchronous
//! work overlaps run interleaved and the one finishing last wins the mount
//! write. There is no cancellation of a superseded transition.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use regex::Regex;

use crate::domain::result::{Error, Result};
use crate::ports::TemplateSource;
use crate::services::{LoggingService, RecipeService, ReviewService, UserService};
use crate::views;

/// Location every malformed or missing identifier resolves to
pub const DEFAULT_LOCATION: &str = "#/home";

/// Location protected routes redirect to when no user is signed in
pub const LOGIN_LOCATION: &str = "#/login";

const RECIPE_ROUTE: &str = "#/recipe";
const LOCATION_GRAMMAR: &str = r"^#(/[A-Za-z0-9][A-Za-z0-9._~-]*)+$";

const NOT_FOUND_TEMPLATE: &str = "notfound.html";
const ERROR_TEMPLATE: &str = "error.html";
const NOT_FOUND_FALLBACK: &str =
    "<section class=\"not-found\"><h1>Page not found</h1></section>";
const ERROR_FALLBACK: &str =
    "<section class=\"error\"><h1>Something went wrong</h1></section>";

/// Closed set of route keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKey {
    Home,
    Login,
    Register,
    Profile,
    Search,
    Cookbook,
    Reviews,
    Recipes,
}

/// A static route table entry, immutable for the process lifetime
pub struct RouteEntry {
    pub key: RouteKey,
    pub pattern: &'static str,
    pub template: &'static str,
    pub requires_auth: bool,
}

/// The route table
///
/// `#/recipe/<id>` decomposes to the `#/recipe` entry plus a dynamic id
/// parameter; every other location matches its pattern literally.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        key: RouteKey::Home,
        pattern: "#/home",
        template: "home.html",
        requires_auth: false,
    },
    RouteEntry {
        key: RouteKey::Login,
        pattern: "#/login",
        template: "login.html",
        requires_auth: false,
    },
    RouteEntry {
        key: RouteKey::Register,
        pattern: "#/register",
        template: "register.html",
        requires_auth: false,
    },
    RouteEntry {
        key: RouteKey::Profile,
        pattern: "#/profile",
        template: "profile.html",
        requires_auth: true,
    },
    RouteEntry {
        key: RouteKey::Search,
        pattern: "#/search",
        template: "search.html",
        requires_auth: false,
    },
    RouteEntry {
        key: RouteKey::Cookbook,
        pattern: "#/cookbook",
        template: "cookbook.html",
        requires_auth: true,
    },
    RouteEntry {
        key: RouteKey::Reviews,
        pattern: "#/reviews",
        template: "reviews.html",
        requires_auth: true,
    },
    RouteEntry {
        key: RouteKey::Recipes,
        pattern: "#/recipe",
        template: "recipes.html",
        requires_auth: false,
    },
];

/// Navigation links, in display order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#/home"),
    ("Search", "#/search"),
    ("Recipes", "#/recipe"),
    ("Cookbook", "#/cookbook"),
    ("Reviews", "#/reviews"),
    ("Profile", "#/profile"),
];

/// Outcome of a route transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A route matched and its view rendered
    Rendered(RouteKey),
    /// No route matched; the not-found pseudo-state rendered
    NotFound,
    /// Template load or view callback failed; the error pseudo-state rendered
    Failed,
}

/// A navigation link with its highlight state
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    pub active: bool,
}

/// The router
pub struct Router {
    users: Arc<UserService>,
    recipes: Arc<RecipeService>,
    reviews: Arc<ReviewService>,
    templates: Arc<dyn TemplateSource>,
    logger: Option<Arc<LoggingService>>,
    template_cache: Mutex<HashMap<String, String>>,
    location: Mutex<String>,
    mount: Mutex<String>,
    grammar: Regex,
}

impl Router {
    pub fn new(
        users: Arc<UserService>,
        recipes: Arc<RecipeService>,
        reviews: Arc<ReviewService>,
        templates: Arc<dyn TemplateSource>,
    ) -> Self {
        Self {
            users,
            recipes,
            reviews,
            templates,
            logger: None,
            template_cache: Mutex::new(HashMap::new()),
            location: Mutex::new(DEFAULT_LOCATION.to_string()),
            mount: Mutex::new(String::new()),
            grammar: Regex::new(LOCATION_GRAMMAR).expect("location grammar"),
        }
    }

    /// Attach an event logger for route transitions and failures
    pub fn with_logger(mut self, logger: Arc<LoggingService>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The currently active location identifier
    pub fn location(&self) -> String {
        self.location.lock().unwrap().clone()
    }

    /// The current content of the mount point
    pub fn mount(&self) -> String {
        self.mount.lock().unwrap().clone()
    }

    /// Navigation links with highlight state
    ///
    /// A link is active iff the current location starts with the link's own
    /// target, so a detail sub-route highlights its parent section link.
    pub fn nav(&self) -> Vec<NavLink> {
        let current = self.location();
        NAV_LINKS
            .iter()
            .map(|(label, target)| NavLink {
                label,
                target,
                active: current.starts_with(target),
            })
            .collect()
    }

    /// Run a transition for the given location identifier
    pub async fn navigate(&self, raw_location: &str) -> Transition {
        let mut location = self.normalize(raw_location);

        // A protected route rewrites the location to the login route and
        // starts over; the aborted transition never renders. The login
        // route itself is unprotected, so one bounce settles it.
        for _ in 0..2 {
            let (key, param) = decompose(&location);
            let entry = match lookup(key) {
                Some(entry) => entry,
                None => {
                    self.render_not_found().await;
                    return Transition::NotFound;
                }
            };

            if entry.requires_auth && self.users.current_user().is_none() {
                location = LOGIN_LOCATION.to_string();
                continue;
            }

            *self.location.lock().unwrap() = location.clone();
            if let Some(logger) = &self.logger {
                let _ = logger.log_route(&location);
            }

            return match self.render(entry, param.as_deref()).await {
                Ok(()) => Transition::Rendered(entry.key),
                Err(e) => {
                    self.render_error(&e).await;
                    Transition::Failed
                }
            };
        }

        self.render_error(&Error::Other("redirect loop".to_string()))
            .await;
        Transition::Failed
    }

    /// Re-run the transition for the currently active location
    ///
    /// Mutations refresh their view through this instead of re-invoking a
    /// view from inside itself, keeping re-entrancy bounded.
    pub async fn refresh(&self) -> Transition {
        let location = self.location();
        self.navigate(&location).await
    }

    /// Normalize a raw identifier; missing or malformed input resolves to
    /// the default location
    fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() || !self.grammar.is_match(trimmed) {
            DEFAULT_LOCATION.to_string()
        } else {
            trimmed.to_string()
        }
    }

    async fn render(&self, entry: &RouteEntry, param: Option<&str>) -> Result<()> {
        let template = self.load_template(entry.template).await?;

        let html = match entry.key {
            RouteKey::Home => views::home::render(&template, &self.users).await?,
            RouteKey::Login => views::auth::render_login(&template).await?,
            RouteKey::Register => views::auth::render_register(&template).await?,
            RouteKey::Profile => {
                views::profile::render(&template, &self.users, &self.reviews).await?
            }
            RouteKey::Search => views::search::render(&template, &self.recipes).await?,
            RouteKey::Cookbook => {
                views::cookbook::render(&template, &self.users, &self.recipes).await?
            }
            RouteKey::Reviews => {
                views::reviews::render(&template, &self.users, &self.reviews, &self.recipes)
                    .await?
            }
            RouteKey::Recipes => views::recipe::render(&template, &self.recipes, param).await?,
        };

        *self.mount.lock().unwrap() = html;
        Ok(())
    }

    /// Load a template through the permanent cache
    ///
    /// The first load fetches and caches; later loads reuse the cached copy
    /// verbatim. Nothing is ever invalidated.
    async fn load_template(&self, reference: &str) -> Result<String> {
        let cached = self
            .template_cache
            .lock()
            .unwrap()
            .get(reference)
            .cloned();
        if let Some(hit) = cached {
            return Ok(hit);
        }

        let body = self.templates.load(reference).await?;
        self.template_cache
            .lock()
            .unwrap()
            .insert(reference.to_string(), body.clone());
        Ok(body)
    }

    async fn render_not_found(&self) {
        let html = self
            .load_template(NOT_FOUND_TEMPLATE)
            .await
            .unwrap_or_else(|_| NOT_FOUND_FALLBACK.to_string());
        *self.mount.lock().unwrap() = html;
    }

    async fn render_error(&self, error: &Error) {
        match &self.logger {
            Some(logger) => {
                let _ = logger.log_error("route_failed", &error.to_string(), None);
            }
            None => eprintln!("[ladle] route failed: {}", error),
        }

        let html = match self.load_template(ERROR_TEMPLATE).await {
            Ok(template) => views::fill(&template, &[("message", &error.to_string())]),
            Err(_) => ERROR_FALLBACK.to_string(),
        };
        *self.mount.lock().unwrap() = html;
    }
}

/// Split a location into its route key and dynamic parameter
///
/// Only `#/recipe/<id>` carries a dynamic segment; everything else matches
/// literally.
fn decompose(location: &str) -> (&str, Option<String>) {
    if let Some(rest) = location.strip_prefix("#/recipe/") {
        if !rest.is_empty() && !rest.contains('/') {
            return (RECIPE_ROUTE, Some(rest.to_string()));
        }
    }
    (location, None)
}

fn lookup(key: &str) -> Option<&'static RouteEntry> {
    ROUTE_TABLE.iter().find(|entry| entry.pattern == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_recipe_detail() {
        let (key, param) = decompose("#/recipe/52772");
        assert_eq!(key, "#/recipe");
        assert_eq!(param.as_deref(), Some("52772"));
    }

    #[test]
    fn test_decompose_literal_routes() {
        assert_eq!(decompose("#/recipe"), ("#/recipe", None));
        assert_eq!(decompose("#/home"), ("#/home", None));
        // A nested segment under a recipe id matches nothing
        assert_eq!(decompose("#/recipe/1/extra"), ("#/recipe/1/extra", None));
    }

    #[test]
    fn test_lookup_covers_the_navigation_surface() {
        for pattern in [
            "#/home", "#/login", "#/register", "#/profile", "#/search", "#/cookbook",
            "#/reviews", "#/recipe",
        ] {
            assert!(lookup(pattern).is_some(), "missing route for {}", pattern);
        }
        assert!(lookup("#/admin").is_none());
    }

    #[test]
    fn test_protected_routes_flagged() {
        for pattern in ["#/profile", "#/cookbook", "#/reviews"] {
            assert!(lookup(pattern).unwrap().requires_auth);
        }
        for pattern in ["#/home", "#/login", "#/register", "#/search", "#/recipe"] {
            assert!(!lookup(pattern).unwrap().requires_auth);
        }
    }
}
