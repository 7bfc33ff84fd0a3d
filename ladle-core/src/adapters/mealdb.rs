//! TheMealDB catalog client
//!
//! Handles communication with the remote recipe catalog and normalizes its
//! wire records (flat fields with numbered ingredient/measure slots) into
//! the internal Recipe shape.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::{Ingredient, Recipe};
use crate::ports::CatalogProvider;

/// Default catalog endpoint (TheMealDB free tier)
pub const DEFAULT_CATALOG_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Number of ingredient/measure slot pairs a wire record can carry
const MAX_INGREDIENT_SLOTS: usize = 20;

/// Upper bound on by-id lookups during an ingredient search
///
/// The ingredient filter endpoint returns partial records, so full records
/// are fetched one by one. Matches beyond this cap are silently dropped to
/// bound request fan-out.
const INGREDIENT_LOOKUP_CAP: usize = 12;

/// Catalog API response: a collection of recipe records, or null for no match
#[derive(Debug, Deserialize)]
struct MealListResponse {
    #[serde(default)]
    meals: Option<Vec<WireMeal>>,
}

/// A recipe record as the catalog sends it
///
/// The ingredient/measure pairs arrive as flatly named fields with numeric
/// suffixes (strIngredient1..20, strMeasure1..20); they are scooped up via
/// the flattened slot map and folded into ordered pairs by `normalize`.
#[derive(Debug, Deserialize)]
struct WireMeal {
    #[serde(rename = "idMeal")]
    id: Option<String>,
    #[serde(rename = "strMeal")]
    name: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strTags")]
    tags: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
    #[serde(rename = "strSource")]
    source: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, serde_json::Value>,
}

impl WireMeal {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.slots
            .get(&format!("{}{}", prefix, index))
            .and_then(|v| v.as_str())
    }
}

/// Convert a wire record into a normalized Recipe
///
/// Records without a usable id are unaddressable and yield None; every other
/// missing field degrades to a safe placeholder. This step never fails.
fn normalize(wire: &WireMeal) -> Option<Recipe> {
    let id = wire.id.as_deref().map(str::trim).unwrap_or_default();
    if id.is_empty() {
        return None;
    }

    let mut ingredients = Vec::new();
    for index in 1..=MAX_INGREDIENT_SLOTS {
        let name = wire
            .slot("strIngredient", index)
            .map(str::trim)
            .unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let measure = wire
            .slot("strMeasure", index)
            .map(str::trim)
            .unwrap_or_default();
        ingredients.push(Ingredient {
            name: name.to_string(),
            measure: measure.to_string(),
        });
    }

    let tags = wire
        .tags
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    fn text_or(value: &Option<String>, fallback: &str) -> String {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => fallback.to_string(),
        }
    }

    Some(Recipe {
        id: id.to_string(),
        name: text_or(&wire.name, "Untitled recipe"),
        category: text_or(&wire.category, "Uncategorized"),
        area: text_or(&wire.area, "Unknown"),
        instructions: text_or(&wire.instructions, "No instructions provided."),
        thumbnail: text_or(&wire.thumbnail, ""),
        tags,
        youtube_url: text_or(&wire.youtube, ""),
        source_url: text_or(&wire.source, ""),
        ingredients,
    })
}

/// Map request errors to user-facing messages
fn map_request_error(error: reqwest::Error) -> Error {
    if error.is_connect() {
        Error::network("unable to reach the recipe catalog")
    } else {
        Error::network(format!("catalog request failed: {}", error))
    }
}

/// Check response status and return appropriate errors
fn check_response_status(response: &reqwest::Response) -> Result<()> {
    match response.status().as_u16() {
        200 => Ok(()),
        429 => Err(Error::network("catalog rate limit exceeded, try again later")),
        status => Err(Error::network(format!("catalog error: HTTP {}", status))),
    }
}

/// HTTP client for the recipe catalog
#[derive(Debug)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a new catalog client for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(base_url).map_err(|_| Error::config("invalid catalog URL format"))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config("catalog URL must use http or https"));
        }

        // No request timeout: a hung call blocks only the view that issued it
        let client = Client::builder()
            .build()
            .map_err(|e| Error::network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_meals(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<WireMeal>> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(map_request_error)?;

        check_response_status(&response)?;

        let data: MealListResponse = response
            .json()
            .await
            .map_err(|e| Error::network(format!("failed to parse catalog response: {}", e)))?;

        Ok(data.meals.unwrap_or_default())
    }

    /// Search recipes by (partial) name
    pub async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let meals = self.fetch_meals("search.php", &[("s", text)]).await?;
        Ok(meals.iter().filter_map(normalize).collect())
    }

    /// List recipes whose name starts with the given letter
    pub async fn search_by_first_letter(&self, letter: &str) -> Result<Vec<Recipe>> {
        let letter = letter.trim();
        let first = match letter.chars().next() {
            Some(c) => c.to_string(),
            None => return Ok(Vec::new()),
        };

        let meals = self
            .fetch_meals("search.php", &[("f", first.as_str())])
            .await?;
        Ok(meals.iter().filter_map(normalize).collect())
    }

    /// Search recipes containing an ingredient
    ///
    /// Two-phase protocol: the filter endpoint returns partial records, so
    /// full records are resolved with individual by-id lookups for at most
    /// the first `INGREDIENT_LOOKUP_CAP` matches. Lookups that resolve to
    /// nothing are discarded; matches beyond the cap are dropped unreported.
    pub async fn search_by_ingredient(&self, text: &str) -> Result<Vec<Recipe>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let partial = self.fetch_meals("filter.php", &[("i", text)]).await?;

        let mut recipes = Vec::new();
        for wire in partial.iter().take(INGREDIENT_LOOKUP_CAP) {
            let id = wire.id.as_deref().map(str::trim).unwrap_or_default();
            if id.is_empty() {
                continue;
            }
            if let Some(recipe) = self.fetch_by_id(id).await? {
                recipes.push(recipe);
            }
        }

        Ok(recipes)
    }

    /// Look up a single recipe by catalog id
    pub async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }

        let meals = self.fetch_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.iter().filter_map(normalize).next())
    }
}

/// Catalog provider backed by the live TheMealDB API
pub struct MealDbProvider {
    client: MealDbClient,
}

impl MealDbProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: MealDbClient::new(base_url)?,
        })
    }
}

#[async_trait]
impl CatalogProvider for MealDbProvider {
    fn name(&self) -> &str {
        "mealdb"
    }

    async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>> {
        self.client.search_by_name(text).await
    }

    async fn search_by_first_letter(&self, letter: &str) -> Result<Vec<Recipe>> {
        self.client.search_by_first_letter(letter).await
    }

    async fn search_by_ingredient(&self, text: &str) -> Result<Vec<Recipe>> {
        self.client.search_by_ingredient(text).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>> {
        self.client.fetch_by_id(id).await
    }
}
