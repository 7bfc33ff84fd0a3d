//! Recipe domain model
//!
//! Recipes are normalized from the catalog's wire records and cached locally
//! by id. Cached recipes never expire and are never invalidated; the catalog
//! is read-only from this application's perspective.

use serde::{Deserialize, Serialize};

/// A single ingredient with its measure, in recipe order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

/// A normalized recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub youtube_url: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}
