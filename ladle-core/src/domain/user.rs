//! User domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum accepted password length for registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// A registered user account
///
/// Passwords are stored and compared as plaintext; hardening the credential
/// handling is explicitly out of scope for this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Legacy free-form field kept for blob compatibility
    #[serde(default)]
    pub favorites: String,
    #[serde(default)]
    pub cookbook: Vec<CookbookEntry>,
}

/// A bookmarked recipe with a private note, embedded in a user's cookbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookbookEntry {
    pub meal_id: String,
    #[serde(default)]
    pub note: String,
}

impl User {
    /// Create a new user with a fresh id and an empty cookbook
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            favorites: String::new(),
            cookbook: Vec::new(),
        }
    }

    /// Validate user data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.id.trim().is_empty() {
            return Err("user id cannot be empty");
        }
        if self.username.trim().is_empty() {
            return Err("username cannot be empty");
        }
        if self.email.trim().is_empty() {
            return Err("email cannot be empty");
        }
        Ok(())
    }

    /// Look up a cookbook entry by meal id
    pub fn cookbook_entry(&self, meal_id: &str) -> Option<&CookbookEntry> {
        self.cookbook.iter().find(|e| e.meal_id == meal_id)
    }

    /// Add or update a cookbook entry
    ///
    /// At most one entry per meal id exists per user: a second call with the
    /// same meal id replaces the note and keeps the entry's position.
    pub fn upsert_cookbook_entry(&mut self, meal_id: impl Into<String>, note: impl Into<String>) {
        let meal_id = meal_id.into();
        let note = note.into();
        match self.cookbook.iter_mut().find(|e| e.meal_id == meal_id) {
            Some(entry) => entry.note = note,
            None => self.cookbook.push(CookbookEntry { meal_id, note }),
        }
    }

    /// Remove a cookbook entry, returning whether one existed
    pub fn remove_cookbook_entry(&mut self, meal_id: &str) -> bool {
        let before = self.cookbook.len();
        self.cookbook.retain(|e| e.meal_id != meal_id);
        self.cookbook.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("carla", "carla@example.com", "secret1");
        assert!(!user.id.is_empty());
        assert_eq!(user.username, "carla");
        assert!(user.cookbook.is_empty());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_cookbook_entry_is_unique_per_meal() {
        let mut user = User::new("carla", "carla@example.com", "secret1");
        user.upsert_cookbook_entry("52772", "less soy sauce next time");
        user.upsert_cookbook_entry("52771", "");
        user.upsert_cookbook_entry("52772", "double the ginger");

        assert_eq!(user.cookbook.len(), 2);
        assert_eq!(user.cookbook[0].meal_id, "52772");
        assert_eq!(user.cookbook[0].note, "double the ginger");
    }

    #[test]
    fn test_remove_cookbook_entry() {
        let mut user = User::new("carla", "carla@example.com", "secret1");
        user.upsert_cookbook_entry("52772", "");

        assert!(user.remove_cookbook_entry("52772"));
        assert!(!user.remove_cookbook_entry("52772"));
        assert!(user.cookbook.is_empty());
    }
}
