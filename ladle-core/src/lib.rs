//! Ladle Core - Business logic for the Ladle recipe browser
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Review, Recipe)
//! - **ports**: Trait definitions for external collaborators (CatalogProvider, TemplateSource)
//! - **services**: The domain repositories atop the persistent store
//! - **adapters**: Concrete implementations (DuckDB store, TheMealDB client, templates)
//! - **router**: The location-driven view state machine
//! - **views**: View controllers invoked by the router

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod router;
pub mod services;
pub mod templates;
pub mod views;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::demo::DemoCatalog;
use adapters::duckdb::DuckDbStore;
use adapters::mealdb::MealDbProvider;
use adapters::templates::{EmbeddedTemplates, FsTemplateSource};
use config::Config;
use ports::{CatalogProvider, TemplateSource};
use router::Router;
use services::{LoggingService, RecipeService, ReviewService, UserService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{CookbookEntry, Ingredient, Recipe, Review, User, MIN_PASSWORD_LEN};
pub use router::{NavLink, RouteKey, Transition, DEFAULT_LOCATION, LOGIN_LOCATION};
pub use services::{LogEntry, LogEvent, RegistrationForm};

/// Main context for Ladle operations
///
/// This is the primary entry point for all business logic. It wires the
/// store, the services, the catalog provider and the router with defined
/// initialization; nothing here depends on load order.
pub struct LadleContext {
    pub config: Config,
    pub store: Arc<DuckDbStore>,
    pub users: Arc<UserService>,
    pub reviews: Arc<ReviewService>,
    pub recipes: Arc<RecipeService>,
    pub logger: Option<Arc<LoggingService>>,
    pub router: Router,
}

impl LadleContext {
    /// Create a new Ladle context rooted at the given data directory
    pub fn new(ladle_dir: &Path) -> Result<Self> {
        let config = Config::load(ladle_dir)?;

        // Demo mode keeps its own database file so real data stays untouched
        let db_filename = if config.demo_mode {
            "demo.duckdb"
        } else {
            "ladle.duckdb"
        };
        let store = Arc::new(DuckDbStore::open(&ladle_dir.join(db_filename))?);

        let catalog: Arc<dyn CatalogProvider> = if config.demo_mode {
            Arc::new(DemoCatalog::new())
        } else {
            Arc::new(MealDbProvider::new(&config.catalog_url)?)
        };

        let template_source: Arc<dyn TemplateSource> = match &config.templates_dir {
            Some(dir) => Arc::new(FsTemplateSource::new(dir.clone())),
            None => Arc::new(EmbeddedTemplates::new()),
        };

        // Logging must never block the application
        let logger = LoggingService::new(ladle_dir, env!("CARGO_PKG_VERSION"))
            .ok()
            .map(Arc::new);

        let users = Arc::new(UserService::new(Arc::clone(&store)));
        let reviews = Arc::new(ReviewService::new(Arc::clone(&store)));
        let recipes = Arc::new(RecipeService::new(Arc::clone(&store), catalog));

        let mut router = Router::new(
            Arc::clone(&users),
            Arc::clone(&recipes),
            Arc::clone(&reviews),
            template_source,
        );
        if let Some(logger) = &logger {
            router = router.with_logger(Arc::clone(logger));
        }

        Ok(Self {
            config,
            store,
            users,
            reviews,
            recipes,
            logger,
            router,
        })
    }
}
