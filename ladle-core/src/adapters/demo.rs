//! Demo catalog provider
//!
//! A small canned set of recipes served entirely from memory, used when demo
//! mode is enabled (offline browsing) and by tests that need a catalog
//! without network IO. Ids match real catalog ids so cached data survives
//! switching demo mode off.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Ingredient, Recipe};
use crate::ports::CatalogProvider;

fn ingredient(name: &str, measure: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        measure: measure.to_string(),
    }
}

/// Build the canned recipe set
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            category: "Chicken".to_string(),
            area: "Japanese".to_string(),
            instructions: "Preheat oven to 350F. Combine soy sauce, water, brown sugar, \
                           ginger and garlic powder in a saucepan and simmer. Toss with \
                           chicken and vegetables, top with rice and bake."
                .to_string(),
            thumbnail: "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg"
                .to_string(),
            tags: vec!["Meat".to_string(), "Casserole".to_string()],
            youtube_url: "https://www.youtube.com/watch?v=4aZr5hZXP_s".to_string(),
            source_url: String::new(),
            ingredients: vec![
                ingredient("soy sauce", "3/4 cup"),
                ingredient("water", "1/2 cup"),
                ingredient("brown sugar", "1/4 cup"),
                ingredient("ground ginger", "1/2 teaspoon"),
                ingredient("chicken breasts", "2"),
                ingredient("stir-fry vegetables", "1 bag"),
                ingredient("white rice", "3 cups"),
            ],
        },
        Recipe {
            id: "52771".to_string(),
            name: "Spicy Arrabiata Penne".to_string(),
            category: "Vegetarian".to_string(),
            area: "Italian".to_string(),
            instructions: "Bring a large pot of water to a boil. Cook the penne until al \
                           dente. Fry the garlic and chilli, add the tomatoes and reduce, \
                           then toss with the pasta and basil."
                .to_string(),
            thumbnail: "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg"
                .to_string(),
            tags: vec!["Pasta".to_string(), "Curry".to_string()],
            youtube_url: "https://www.youtube.com/watch?v=1IszT_guI08".to_string(),
            source_url: String::new(),
            ingredients: vec![
                ingredient("penne rigate", "1 pound"),
                ingredient("olive oil", "1/4 cup"),
                ingredient("garlic", "3 cloves"),
                ingredient("chopped tomatoes", "1 tin"),
                ingredient("red chilli flakes", "1/2 teaspoon"),
                ingredient("italian seasoning", "1/2 teaspoon"),
                ingredient("basil", "6 leaves"),
            ],
        },
        Recipe {
            id: "52977".to_string(),
            name: "Corba".to_string(),
            category: "Side".to_string(),
            area: "Turkish".to_string(),
            instructions: "Pick through the lentils and rinse. Saute the onion, carrot \
                           and pepper paste, add spices and lentils, cover with stock \
                           and simmer for 30 minutes. Blend until smooth."
                .to_string(),
            thumbnail: "https://www.themealdb.com/images/media/meals/58oia61564916529.jpg"
                .to_string(),
            tags: vec!["Soup".to_string()],
            youtube_url: String::new(),
            source_url: "https://findingtimeforcooking.com/main-dishes/red-lentil-soup-corba/"
                .to_string(),
            ingredients: vec![
                ingredient("red lentils", "1 cup"),
                ingredient("onion", "1 large"),
                ingredient("carrot", "1 large"),
                ingredient("tomato puree", "1 tablespoon"),
                ingredient("cumin", "2 teaspoons"),
                ingredient("paprika", "1 teaspoon"),
                ingredient("vegetable stock", "4 cups"),
            ],
        },
        Recipe {
            id: "53013".to_string(),
            name: "Salmon Avocado Salad".to_string(),
            category: "Seafood".to_string(),
            area: "British".to_string(),
            instructions: "Season the salmon and pan-fry skin side down until crisp. \
                           Toss the leaves, avocado and cucumber with the dressing and \
                           flake the salmon over the top."
                .to_string(),
            thumbnail: "https://www.themealdb.com/images/media/meals/1549542994.jpg"
                .to_string(),
            tags: Vec::new(),
            youtube_url: String::new(),
            source_url: String::new(),
            ingredients: vec![
                ingredient("salmon", "2 fillets"),
                ingredient("avocado", "1"),
                ingredient("cucumber", "1/2"),
                ingredient("mixed leaves", "2 handfuls"),
                ingredient("olive oil", "2 tablespoons"),
            ],
        },
    ]
}

/// Catalog provider backed by the canned recipe set
pub struct DemoCatalog {
    recipes: Vec<Recipe>,
}

impl DemoCatalog {
    pub fn new() -> Self {
        Self {
            recipes: demo_recipes(),
        }
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for DemoCatalog {
    fn name(&self) -> &str {
        "demo"
    }

    async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn search_by_first_letter(&self, letter: &str) -> Result<Vec<Recipe>> {
        let first = match letter.trim().chars().next() {
            Some(c) => c.to_lowercase().to_string(),
            None => return Ok(Vec::new()),
        };
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.name.to_lowercase().starts_with(&first))
            .cloned()
            .collect())
    }

    async fn search_by_ingredient(&self, text: &str) -> Result<Vec<Recipe>> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .recipes
            .iter()
            .filter(|r| {
                r.ingredients
                    .iter()
                    .any(|i| i.name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self.recipes.iter().find(|r| r.id == id.trim()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_lookup_and_search() {
        let catalog = DemoCatalog::new();

        let hit = catalog.fetch_by_id("52772").await.unwrap();
        assert_eq!(hit.unwrap().name, "Teriyaki Chicken Casserole");

        let by_name = catalog.search_by_name("penne").await.unwrap();
        assert_eq!(by_name.len(), 1);

        let by_letter = catalog.search_by_first_letter("c").await.unwrap();
        assert_eq!(by_letter.len(), 1);

        let by_ingredient = catalog.search_by_ingredient("olive oil").await.unwrap();
        assert_eq!(by_ingredient.len(), 2);
    }

    #[tokio::test]
    async fn test_demo_blank_input_short_circuits() {
        let catalog = DemoCatalog::new();

        assert!(catalog.search_by_name("  ").await.unwrap().is_empty());
        assert!(catalog.search_by_first_letter("").await.unwrap().is_empty());
        assert!(catalog.search_by_ingredient("").await.unwrap().is_empty());
    }
}
