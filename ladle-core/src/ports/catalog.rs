//! Recipe catalog port
//!
//! Defines the interface for querying the external recipe catalog. The
//! gateway normalizes heterogeneous wire records into the internal Recipe
//! shape; implementations decide where the records come from (HTTP catalog,
//! canned demo data).

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::Recipe;

/// Recipe catalog provider trait
///
/// All four operations short-circuit blank or whitespace-only input to an
/// empty result without touching the network.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Provider name (e.g., "mealdb", "demo")
    fn name(&self) -> &str;

    /// Search recipes by (partial) name
    async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>>;

    /// List recipes whose name starts with the given letter
    async fn search_by_first_letter(&self, letter: &str) -> Result<Vec<Recipe>>;

    /// Search recipes containing an ingredient
    ///
    /// The catalog's ingredient filter returns partial records, so providers
    /// resolve full records for a bounded number of matches and silently drop
    /// the rest.
    async fn search_by_ingredient(&self, text: &str) -> Result<Vec<Recipe>>;

    /// Look up a single recipe by catalog id
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>>;
}
