//! User service - accounts, session and cookbook writes
//!
//! Users live as one ordered JSON blob under `ladle.users`; every write is a
//! full-collection replace (read-modify-write). The current session is a
//! separate single-slot pointer under `ladle.session`.

use std::sync::Arc;

use crate::adapters::duckdb::{DuckDbStore, REVIEWS_KEY, SESSION_KEY, USERS_KEY};
use crate::domain::result::{Error, Result};
use crate::domain::{Review, User, MIN_PASSWORD_LEN};

/// Registration form input
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// User service for accounts and the current session
pub struct UserService {
    store: Arc<DuckDbStore>,
}

impl UserService {
    pub fn new(store: Arc<DuckDbStore>) -> Self {
        Self { store }
    }

    /// Get the full ordered user collection
    pub fn list_users(&self) -> Vec<User> {
        self.store.get(USERS_KEY, Vec::new())
    }

    /// Replace the full user collection
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        self.store.set(USERS_KEY, &users)
    }

    /// Insert or update a user, matched by id
    ///
    /// Linear scan: replaces the record if the id exists, appends otherwise.
    /// If the session pointer holds the same id it is refreshed afterwards so
    /// a signed-in session never keeps a stale copy.
    pub fn upsert_user(&self, user: &User) -> Result<()> {
        let mut users = self.list_users();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user.clone(),
            None => users.push(user.clone()),
        }
        self.save_users(&users)?;

        if let Some(current) = self.current_user() {
            if current.id == user.id {
                self.set_current_user(Some(user))?;
            }
        }
        Ok(())
    }

    /// Delete a user and cascade to their reviews and the session pointer
    ///
    /// Three independent single-key writes in sequence: users, reviews,
    /// session. There is no cross-key transaction; an interruption between
    /// writes can leave orphaned reviews behind. The user record goes first
    /// so an interrupted cascade never resurrects the account.
    pub fn delete_user(&self, id: &str) -> Result<()> {
        let users: Vec<User> = self
            .list_users()
            .into_iter()
            .filter(|u| u.id != id)
            .collect();
        self.save_users(&users)?;

        let reviews: Vec<Review> = self
            .store
            .get::<Vec<Review>>(REVIEWS_KEY, Vec::new())
            .into_iter()
            .filter(|r| r.user_id != id)
            .collect();
        self.store.set(REVIEWS_KEY, &reviews)?;

        if self.current_user().map(|u| u.id == id).unwrap_or(false) {
            self.set_current_user(None)?;
        }
        Ok(())
    }

    /// The signed-in user, if any
    ///
    /// The pointer is not checked against the user collection; a dangling
    /// reference is representable and up to callers to tolerate.
    pub fn current_user(&self) -> Option<User> {
        self.store.get(SESSION_KEY, None)
    }

    /// Set or clear the session pointer
    pub fn set_current_user(&self, user: Option<&User>) -> Result<()> {
        self.store.set(SESSION_KEY, &user)
    }

    /// Register a new account and sign it in
    ///
    /// All validation runs before any write: a rejected form leaves the
    /// store untouched.
    pub fn register(&self, form: &RegistrationForm) -> Result<User> {
        let username = form.username.trim();
        let email = form.email.trim();

        if username.is_empty() || email.is_empty() || form.password.is_empty() {
            return Err(Error::validation("all fields are required"));
        }
        if form.password.len() < MIN_PASSWORD_LEN {
            return Err(Error::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if form.password != form.confirm_password {
            return Err(Error::validation("passwords do not match"));
        }

        let mut users = self.list_users();
        if users.iter().any(|u| u.username == username) {
            return Err(Error::validation("username is already taken"));
        }
        if users.iter().any(|u| u.email == email) {
            return Err(Error::validation("email is already registered"));
        }

        let user = User::new(username, email, &form.password);
        users.push(user.clone());
        self.save_users(&users)?;
        self.set_current_user(Some(&user))?;
        Ok(user)
    }

    /// Sign in with username and password
    ///
    /// Credentials are compared in plaintext; a failed match is reported
    /// without revealing which field was wrong.
    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        let username = username.trim();
        let user = self
            .list_users()
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or_else(|| Error::validation("invalid username or password"))?;

        self.set_current_user(Some(&user))?;
        Ok(user)
    }

    /// Clear the session pointer
    pub fn logout(&self) -> Result<()> {
        self.set_current_user(None)
    }

    fn require_current(&self) -> Result<User> {
        self.current_user()
            .ok_or_else(|| Error::not_found("no user is signed in"))
    }

    /// Bookmark a recipe into the signed-in user's cookbook
    pub fn bookmark(&self, meal_id: &str, note: &str) -> Result<User> {
        if meal_id.trim().is_empty() {
            return Err(Error::validation("a recipe id is required"));
        }
        let mut user = self.require_current()?;
        user.upsert_cookbook_entry(meal_id.trim(), note);
        self.upsert_user(&user)?;
        Ok(user)
    }

    /// Update the note of an existing cookbook entry
    pub fn set_note(&self, meal_id: &str, note: &str) -> Result<User> {
        let mut user = self.require_current()?;
        if user.cookbook_entry(meal_id).is_none() {
            return Err(Error::not_found(format!(
                "recipe {} is not in the cookbook",
                meal_id
            )));
        }
        user.upsert_cookbook_entry(meal_id, note);
        self.upsert_user(&user)?;
        Ok(user)
    }

    /// Remove a recipe from the signed-in user's cookbook
    pub fn unbookmark(&self, meal_id: &str) -> Result<User> {
        let mut user = self.require_current()?;
        if !user.remove_cookbook_entry(meal_id) {
            return Err(Error::not_found(format!(
                "recipe {} is not in the cookbook",
                meal_id
            )));
        }
        self.upsert_user(&user)?;
        Ok(user)
    }
}
