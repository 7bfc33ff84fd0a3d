//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DuckDB for the persistent key-value store
//! - TheMealDB HTTP client for CatalogProvider
//! - Canned demo data for CatalogProvider (offline/demo mode)
//! - Embedded fragments and the local filesystem for TemplateSource

pub mod demo;
pub mod duckdb;
pub mod mealdb;
pub mod templates;
