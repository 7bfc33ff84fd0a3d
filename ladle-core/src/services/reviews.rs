//! Review service - reviews keyed by (recipe, user)
//!
//! Reviews live as one ordered JSON blob under `ladle.reviews` with the same
//! full-collection replace discipline as users. The upsert key is
//! (recipe_id, user_id), not the review id: resubmitting replaces the
//! earlier review and keeps its id.

use std::sync::Arc;

use uuid::Uuid;

use crate::adapters::duckdb::{DuckDbStore, REVIEWS_KEY};
use crate::domain::result::Result;
use crate::domain::Review;

/// Review service
pub struct ReviewService {
    store: Arc<DuckDbStore>,
}

impl ReviewService {
    pub fn new(store: Arc<DuckDbStore>) -> Self {
        Self { store }
    }

    /// Get the full ordered review collection
    pub fn list_reviews(&self) -> Vec<Review> {
        self.store.get(REVIEWS_KEY, Vec::new())
    }

    /// Replace the full review collection
    pub fn save_reviews(&self, reviews: &[Review]) -> Result<()> {
        self.store.set(REVIEWS_KEY, &reviews)
    }

    /// Insert or update a review, matched by (recipe_id, user_id)
    ///
    /// Validation runs before any write. An id is generated on first insert
    /// only; an update overwrites the fields but reuses the stored id, so
    /// resubmission is idempotent with respect to identity.
    pub fn upsert_review(&self, review: &Review) -> Result<Review> {
        review.validate()?;

        let mut reviews = self.list_reviews();
        let mut stored = review.clone();

        match reviews
            .iter_mut()
            .find(|r| r.recipe_id == review.recipe_id && r.user_id == review.user_id)
        {
            Some(existing) => {
                stored.id = existing.id.clone();
                *existing = stored.clone();
            }
            None => {
                if stored.id.trim().is_empty() {
                    stored.id = Uuid::new_v4().to_string();
                }
                reviews.push(stored.clone());
            }
        }

        self.save_reviews(&reviews)?;
        Ok(stored)
    }

    /// All reviews written by a user, in stored order
    pub fn reviews_for_user(&self, user_id: &str) -> Vec<Review> {
        self.list_reviews()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    /// All reviews of a recipe, in stored order
    pub fn reviews_for_recipe(&self, recipe_id: &str) -> Vec<Review> {
        self.list_reviews()
            .into_iter()
            .filter(|r| r.recipe_id == recipe_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ReviewService {
        ReviewService::new(Arc::new(DuckDbStore::open_in_memory().unwrap()))
    }

    #[test]
    fn test_upsert_reuses_id_on_resubmission() {
        let reviews = service();

        let first = reviews
            .upsert_review(&Review::new("52772", "u1", "2024-03-09", 3, 5, "great"))
            .unwrap();
        let second = reviews
            .upsert_review(&Review::new("52772", "u1", "2024-03-10", 2, 4, "even better"))
            .unwrap();

        assert_eq!(first.id, second.id);

        let stored = reviews.list_reviews();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].comment, "even better");
        assert_eq!(stored[0].prepared_on, "2024-03-10");
    }

    #[test]
    fn test_upsert_distinguishes_users_and_recipes() {
        let reviews = service();

        reviews
            .upsert_review(&Review::new("52772", "u1", "2024-03-09", 3, 5, ""))
            .unwrap();
        reviews
            .upsert_review(&Review::new("52772", "u2", "2024-03-09", 1, 2, ""))
            .unwrap();
        reviews
            .upsert_review(&Review::new("52771", "u1", "2024-03-09", 4, 4, ""))
            .unwrap();

        assert_eq!(reviews.list_reviews().len(), 3);
        assert_eq!(reviews.reviews_for_user("u1").len(), 2);
        assert_eq!(reviews.reviews_for_recipe("52772").len(), 2);
    }

    #[test]
    fn test_invalid_review_leaves_store_untouched() {
        let reviews = service();

        let result = reviews.upsert_review(&Review::new("52772", "u1", "2024-03-09", 9, 5, ""));
        assert!(result.is_err());
        assert!(reviews.list_reviews().is_empty());
    }
}
