//! Review domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::{Error, Result};

/// Date format accepted for the prepared-on field
pub const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d";

/// A user's review of a recipe they prepared
///
/// At most one review per (recipe, user) pair is meaningful; resubmitting
/// replaces the earlier review while keeping its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub recipe_id: String,
    pub user_id: String,
    /// Date the dish was prepared, as YYYY-MM-DD
    pub prepared_on: String,
    pub difficulty: u8,
    pub taste: u8,
    #[serde(default)]
    pub comment: String,
}

impl Review {
    pub fn new(
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
        prepared_on: impl Into<String>,
        difficulty: u8,
        taste: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipe_id: recipe_id.into(),
            user_id: user_id.into(),
            prepared_on: prepared_on.into(),
            difficulty,
            taste,
            comment: comment.into(),
        }
    }

    /// Validate review data before it is persisted
    pub fn validate(&self) -> Result<()> {
        if self.recipe_id.trim().is_empty() {
            return Err(Error::validation("review is missing a recipe id"));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::validation("review is missing a user id"));
        }
        if !(1..=5).contains(&self.difficulty) {
            return Err(Error::validation("difficulty must be between 1 and 5"));
        }
        if !(1..=5).contains(&self.taste) {
            return Err(Error::validation("taste must be between 1 and 5"));
        }
        if NaiveDate::parse_from_str(&self.prepared_on, REVIEW_DATE_FORMAT).is_err() {
            return Err(Error::validation(
                "prepared-on must be a date in YYYY-MM-DD form",
            ));
        }
        Ok(())
    }
}
