//! Recipe service - local cache plus catalog facade
//!
//! The durable cache is a mapping of recipe id to normalized Recipe under
//! `ladle.recipes`. Entries never expire and are never invalidated; the
//! catalog is read-only from this application's perspective. Search results
//! are transient and held in memory only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::adapters::duckdb::{DuckDbStore, RECIPES_KEY};
use crate::domain::result::Result;
use crate::domain::Recipe;
use crate::ports::CatalogProvider;

/// Recipe service
pub struct RecipeService {
    store: Arc<DuckDbStore>,
    catalog: Arc<dyn CatalogProvider>,
    last_results: Mutex<Vec<Recipe>>,
}

impl RecipeService {
    pub fn new(store: Arc<DuckDbStore>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            store,
            catalog,
            last_results: Mutex::new(Vec::new()),
        }
    }

    /// Name of the backing catalog provider
    pub fn catalog_name(&self) -> &str {
        self.catalog.name()
    }

    fn cache(&self) -> HashMap<String, Recipe> {
        self.store.get(RECIPES_KEY, HashMap::new())
    }

    /// Look up a recipe in the local cache
    pub fn cached(&self, id: &str) -> Option<Recipe> {
        self.cache().remove(id)
    }

    /// Number of recipes in the local cache
    pub fn cached_count(&self) -> usize {
        self.cache().len()
    }

    /// All cached recipes, sorted by name
    pub fn cached_recipes(&self) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = self.cache().into_values().collect();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        recipes
    }

    /// Merge recipes into the cache
    ///
    /// Existing entries with the same id are overwritten; nothing is ever
    /// removed.
    pub fn put_many(&self, recipes: &[Recipe]) -> Result<()> {
        let mut cache = self.cache();
        for recipe in recipes {
            cache.insert(recipe.id.clone(), recipe.clone());
        }
        self.store.set(RECIPES_KEY, &cache)
    }

    /// Return the cached recipe, populating the cache from the catalog on a miss
    ///
    /// This is the sole cache-population path. Concurrent calls for the same
    /// id may each issue a catalog lookup; the duplicate write is a harmless
    /// idempotent overwrite.
    pub async fn ensure_cached(&self, id: &str) -> Result<Option<Recipe>> {
        if let Some(hit) = self.cached(id) {
            return Ok(Some(hit));
        }

        match self.catalog.fetch_by_id(id).await? {
            Some(recipe) => {
                self.put_many(std::slice::from_ref(&recipe))?;
                Ok(Some(recipe))
            }
            None => Ok(None),
        }
    }

    /// Search the catalog by name and remember the results
    pub async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>> {
        let found = self.catalog.search_by_name(text).await?;
        self.remember(&found);
        Ok(found)
    }

    /// Search the catalog by first letter and remember the results
    pub async fn search_by_first_letter(&self, letter: &str) -> Result<Vec<Recipe>> {
        let found = self.catalog.search_by_first_letter(letter).await?;
        self.remember(&found);
        Ok(found)
    }

    /// Search the catalog by ingredient and remember the results
    pub async fn search_by_ingredient(&self, text: &str) -> Result<Vec<Recipe>> {
        let found = self.catalog.search_by_ingredient(text).await?;
        self.remember(&found);
        Ok(found)
    }

    /// The most recent search results (in-memory, not persisted)
    pub fn last_results(&self) -> Vec<Recipe> {
        self.last_results.lock().unwrap().clone()
    }

    fn remember(&self, results: &[Recipe]) {
        *self.last_results.lock().unwrap() = results.to_vec();
    }
}
