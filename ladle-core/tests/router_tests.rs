//! Integration tests for the router
//!
//! These tests drive full route transitions against a real in-memory store.
//! The catalog and template collaborators are mocked at the trait level.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use ladle_core::adapters::demo::DemoCatalog;
use ladle_core::adapters::duckdb::DuckDbStore;
use ladle_core::adapters::templates::EmbeddedTemplates;
use ladle_core::domain::result::{Error, Result};
use ladle_core::domain::Recipe;
use ladle_core::ports::{CatalogProvider, TemplateSource};
use ladle_core::router::{RouteKey, Router, Transition};
use ladle_core::services::{RecipeService, RegistrationForm, ReviewService, UserService};

// ============================================================================
// Test Helpers
// ============================================================================

/// Catalog wrapper that counts by-id lookups
struct CountingCatalog {
    inner: DemoCatalog,
    fetches: AtomicUsize,
}

impl CountingCatalog {
    fn new() -> Self {
        Self {
            inner: DemoCatalog::new(),
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CatalogProvider for CountingCatalog {
    fn name(&self) -> &str {
        "counting"
    }

    async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>> {
        self.inner.search_by_name(text).await
    }

    async fn search_by_first_letter(&self, letter: &str) -> Result<Vec<Recipe>> {
        self.inner.search_by_first_letter(letter).await
    }

    async fn search_by_ingredient(&self, text: &str) -> Result<Vec<Recipe>> {
        self.inner.search_by_ingredient(text).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_by_id(id).await
    }
}

/// Template source that counts loads and can delay one reference
struct InstrumentedTemplates {
    inner: EmbeddedTemplates,
    loads: AtomicUsize,
    delayed: Option<(&'static str, Duration)>,
}

impl InstrumentedTemplates {
    fn new() -> Self {
        Self {
            inner: EmbeddedTemplates::new(),
            loads: AtomicUsize::new(0),
            delayed: None,
        }
    }

    fn with_delay(reference: &'static str, delay: Duration) -> Self {
        Self {
            inner: EmbeddedTemplates::new(),
            loads: AtomicUsize::new(0),
            delayed: Some((reference, delay)),
        }
    }
}

#[async_trait]
impl TemplateSource for InstrumentedTemplates {
    async fn load(&self, reference: &str) -> Result<String> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some((delayed_ref, delay)) = self.delayed {
            if reference == delayed_ref {
                tokio::time::sleep(delay).await;
            }
        }
        self.inner.load(reference).await
    }
}

/// Template source that always fails
struct BrokenTemplates;

#[async_trait]
impl TemplateSource for BrokenTemplates {
    async fn load(&self, reference: &str) -> Result<String> {
        Err(Error::template(format!("cannot load {}", reference)))
    }
}

struct TestApp {
    users: Arc<UserService>,
    recipes: Arc<RecipeService>,
    router: Arc<Router>,
}

fn build_app(catalog: Arc<dyn CatalogProvider>, templates: Arc<dyn TemplateSource>) -> TestApp {
    let store = Arc::new(DuckDbStore::open_in_memory().expect("store"));
    let users = Arc::new(UserService::new(Arc::clone(&store)));
    let reviews = Arc::new(ReviewService::new(Arc::clone(&store)));
    let recipes = Arc::new(RecipeService::new(Arc::clone(&store), catalog));
    let router = Arc::new(Router::new(
        Arc::clone(&users),
        Arc::clone(&recipes),
        Arc::clone(&reviews),
        templates,
    ));
    TestApp {
        users,
        recipes,
        router,
    }
}

fn demo_app() -> TestApp {
    build_app(
        Arc::new(DemoCatalog::new()),
        Arc::new(EmbeddedTemplates::new()),
    )
}

fn register_carla(users: &UserService) {
    users
        .register(&RegistrationForm {
            username: "carla".to_string(),
            email: "carla@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        })
        .expect("registration");
}

// ============================================================================
// Route Matching
// ============================================================================

#[tokio::test]
async fn test_valid_locations_match_exactly_one_route() {
    let app = demo_app();
    register_carla(&app.users);

    let cases = [
        ("#/home", RouteKey::Home),
        ("#/login", RouteKey::Login),
        ("#/register", RouteKey::Register),
        ("#/profile", RouteKey::Profile),
        ("#/search", RouteKey::Search),
        ("#/cookbook", RouteKey::Cookbook),
        ("#/reviews", RouteKey::Reviews),
        ("#/recipe", RouteKey::Recipes),
        ("#/recipe/52772", RouteKey::Recipes),
    ];

    for (location, expected) in cases {
        let transition = app.router.navigate(location).await;
        assert_eq!(
            transition,
            Transition::Rendered(expected),
            "location {}",
            location
        );
        assert_eq!(app.router.location(), location);
    }
}

#[tokio::test]
async fn test_malformed_locations_resolve_to_default_route() {
    let app = demo_app();

    for raw in ["", "   ", "garbage", "/home", "#", "#//", "#/home/"] {
        let transition = app.router.navigate(raw).await;
        assert_eq!(
            transition,
            Transition::Rendered(RouteKey::Home),
            "raw location {:?}",
            raw
        );
        assert_eq!(app.router.location(), "#/home");
    }
}

#[tokio::test]
async fn test_unmatched_location_renders_not_found_without_state_change() {
    let app = demo_app();
    app.router.navigate("#/home").await;

    let transition = app.router.navigate("#/admin").await;
    assert_eq!(transition, Transition::NotFound);
    assert!(app.router.mount().contains("Page not found"));

    // The failed transition records no new active location
    assert_eq!(app.router.location(), "#/home");
}

// ============================================================================
// Authorization Gate
// ============================================================================

#[tokio::test]
async fn test_protected_route_redirects_to_login_without_session() {
    let app = demo_app();

    for location in ["#/profile", "#/cookbook", "#/reviews"] {
        let transition = app.router.navigate(location).await;
        assert_eq!(transition, Transition::Rendered(RouteKey::Login));
        assert_eq!(app.router.location(), "#/login");
        assert!(app.router.mount().contains("Sign in"));
    }
}

#[tokio::test]
async fn test_protected_route_renders_with_session() {
    let app = demo_app();
    register_carla(&app.users);

    let transition = app.router.navigate("#/profile").await;
    assert_eq!(transition, Transition::Rendered(RouteKey::Profile));
    assert_eq!(app.router.location(), "#/profile");
    assert!(app.router.mount().contains("carla"));
}

// ============================================================================
// Recipe Detail and Cache
// ============================================================================

#[tokio::test]
async fn test_recipe_detail_renders_from_dynamic_parameter() {
    let app = demo_app();

    let transition = app.router.navigate("#/recipe/52772").await;
    assert_eq!(transition, Transition::Rendered(RouteKey::Recipes));
    assert!(app.router.mount().contains("Teriyaki Chicken Casserole"));
    assert!(app.router.mount().contains("soy sauce"));
}

#[tokio::test]
async fn test_unresolvable_recipe_id_is_a_message_not_an_error_state() {
    let app = demo_app();

    let transition = app.router.navigate("#/recipe/99999").await;
    assert_eq!(transition, Transition::Rendered(RouteKey::Recipes));
    assert!(app.router.mount().contains("was not found"));
}

#[tokio::test]
async fn test_ensure_cached_fetches_at_most_once() {
    let catalog = Arc::new(CountingCatalog::new());
    let app = build_app(Arc::clone(&catalog) as Arc<dyn CatalogProvider>, Arc::new(EmbeddedTemplates::new()));

    let first = app.recipes.ensure_cached("52772").await.unwrap().unwrap();
    let second = app.recipes.ensure_cached("52772").await.unwrap().unwrap();

    assert_eq!(catalog.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_repeat_detail_navigation_reuses_the_cache() {
    let catalog = Arc::new(CountingCatalog::new());
    let app = build_app(Arc::clone(&catalog) as Arc<dyn CatalogProvider>, Arc::new(EmbeddedTemplates::new()));

    app.router.navigate("#/recipe/52772").await;
    let first_mount = app.router.mount();
    app.router.navigate("#/recipe/52772").await;

    assert_eq!(catalog.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(app.router.mount(), first_mount);
}

// ============================================================================
// Templates and Pseudo-States
// ============================================================================

#[tokio::test]
async fn test_template_cache_loads_each_reference_once() {
    let templates = Arc::new(InstrumentedTemplates::new());
    let app = build_app(
        Arc::new(DemoCatalog::new()),
        Arc::clone(&templates) as Arc<dyn TemplateSource>,
    );

    app.router.navigate("#/home").await;
    app.router.navigate("#/home").await;
    app.router.navigate("#/home").await;

    assert_eq!(templates.loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_template_failure_renders_error_state() {
    let app = build_app(Arc::new(DemoCatalog::new()), Arc::new(BrokenTemplates));

    let transition = app.router.navigate("#/home").await;
    assert_eq!(transition, Transition::Failed);
    assert!(app.router.mount().contains("Something went wrong"));
}

// ============================================================================
// Navigation Highlighting
// ============================================================================

#[tokio::test]
async fn test_detail_sub_route_highlights_parent_section() {
    let app = demo_app();
    app.router.navigate("#/recipe/52772").await;

    let nav = app.router.nav();
    for link in nav {
        if link.target == "#/recipe" {
            assert!(link.active, "Recipes link should be active");
        } else {
            assert!(!link.active, "{} should be inactive", link.label);
        }
    }
}

// ============================================================================
// Explicit Refresh
// ============================================================================

#[tokio::test]
async fn test_refresh_rerenders_the_active_view_after_a_mutation() {
    let app = demo_app();
    register_carla(&app.users);

    app.router.navigate("#/cookbook").await;
    assert!(app.router.mount().contains("cookbook is empty"));

    app.users.bookmark("52772", "weeknight staple").unwrap();

    let transition = app.router.refresh().await;
    assert_eq!(transition, Transition::Rendered(RouteKey::Cookbook));
    assert!(app.router.mount().contains("Teriyaki Chicken Casserole"));
    assert!(app.router.mount().contains("weeknight staple"));
}

// ============================================================================
// Concurrency - documented last-writer-wins race
// ============================================================================

/// Two interleaved transitions are not cancelled; the one that finishes last
/// wins the mount write even though the faster one recorded the location
/// afterwards. This pins down the accepted race rather than fixing it.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_interleaved_transitions_last_writer_wins() {
    let templates = Arc::new(InstrumentedTemplates::with_delay(
        "search.html",
        Duration::from_millis(150),
    ));
    let app = build_app(
        Arc::new(DemoCatalog::new()),
        Arc::clone(&templates) as Arc<dyn TemplateSource>,
    );

    let slow_router = Arc::clone(&app.router);
    let slow = tokio::spawn(async move { slow_router.navigate("#/search").await });

    // Let the slow transition record its location and start its template load
    tokio::time::sleep(Duration::from_millis(30)).await;
    let fast = app.router.navigate("#/home").await;
    assert_eq!(fast, Transition::Rendered(RouteKey::Home));

    let slow = slow.await.expect("join");
    assert_eq!(slow, Transition::Rendered(RouteKey::Search));

    // The fast transition wrote the location last, the slow one the mount
    assert_eq!(app.router.location(), "#/home");
    assert!(app.router.mount().contains("Search recipes"));
}

// ============================================================================
// End-to-End Registration Flow
// ============================================================================

#[tokio::test]
async fn test_registration_lands_on_profile_and_signs_in() {
    let app = demo_app();

    let user = app
        .users
        .register(&RegistrationForm {
            username: "nadia".to_string(),
            email: "nadia@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
        })
        .unwrap();

    assert_eq!(app.users.current_user().unwrap().id, user.id);

    let transition = app.router.navigate("#/profile").await;
    assert_eq!(transition, Transition::Rendered(RouteKey::Profile));
    assert!(app.router.mount().contains("nadia"));

    // A duplicate registration fails validation and mutates nothing
    let result = app.users.register(&RegistrationForm {
        username: "nadia".to_string(),
        email: "different@example.com".to_string(),
        password: "longenough".to_string(),
        confirm_password: "longenough".to_string(),
    });
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(app.users.list_users().len(), 1);
}
