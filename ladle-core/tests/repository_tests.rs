//! Integration tests for the persistence layer and repositories
//!
//! These tests verify data integrity scenarios against a real file-backed
//! DuckDB store, including behavior across process-style reopen.

use std::sync::Arc;

use tempfile::TempDir;

use ladle_core::adapters::demo::demo_recipes;
use ladle_core::adapters::duckdb::DuckDbStore;
use ladle_core::domain::result::Error;
use ladle_core::domain::{Review, User};
use ladle_core::services::{RegistrationForm, ReviewService, UserService};

// ============================================================================
// Test Helpers
// ============================================================================

fn open_store(temp_dir: &TempDir) -> Arc<DuckDbStore> {
    let db_path = temp_dir.path().join("test.duckdb");
    Arc::new(DuckDbStore::open(&db_path).expect("Failed to open store"))
}

fn registration(username: &str, email: &str) -> RegistrationForm {
    RegistrationForm {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

fn review(recipe_id: &str, user_id: &str, comment: &str) -> Review {
    Review::new(recipe_id, user_id, "2024-03-09", 3, 4, comment)
}

// ============================================================================
// User Upsert
// ============================================================================

#[test]
fn test_upsert_user_twice_keeps_one_record_with_latest_values() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    let mut user = users.register(&registration("carla", "carla@example.com")).unwrap();
    let before = users.list_users().len();

    user.email = "first@example.com".to_string();
    users.upsert_user(&user).unwrap();
    user.email = "second@example.com".to_string();
    users.upsert_user(&user).unwrap();

    let stored = users.list_users();
    assert_eq!(stored.len(), before);
    assert_eq!(stored[0].email, "second@example.com");
}

#[test]
fn test_upsert_appends_unknown_id() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    let user = User::new("imported", "imported@example.com", "secret1");
    users.upsert_user(&user).unwrap();

    assert_eq!(users.list_users().len(), 1);
}

#[test]
fn test_users_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = open_store(&temp_dir);
        let users = UserService::new(store);
        users.register(&registration("carla", "carla@example.com")).unwrap();
    }

    let store = open_store(&temp_dir);
    let users = UserService::new(store);
    assert_eq!(users.list_users().len(), 1);
    assert_eq!(users.current_user().unwrap().username, "carla");
}

// ============================================================================
// Delete Cascade
// ============================================================================

#[test]
fn test_delete_user_cascades_to_reviews_and_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));
    let reviews = ReviewService::new(Arc::clone(&store));

    let carla = users.register(&registration("carla", "carla@example.com")).unwrap();
    let nadia = users.register(&registration("nadia", "nadia@example.com")).unwrap();

    reviews.upsert_review(&review("52772", &carla.id, "good")).unwrap();
    reviews.upsert_review(&review("52771", &carla.id, "fine")).unwrap();
    reviews.upsert_review(&review("52772", &nadia.id, "great")).unwrap();

    // Carla is the current user at deletion time
    users.set_current_user(Some(&carla)).unwrap();
    users.delete_user(&carla.id).unwrap();

    let remaining_users = users.list_users();
    assert_eq!(remaining_users.len(), 1);
    assert_eq!(remaining_users[0].id, nadia.id);

    let remaining_reviews = reviews.list_reviews();
    assert_eq!(remaining_reviews.len(), 1);
    assert_eq!(remaining_reviews[0].user_id, nadia.id);

    assert!(users.current_user().is_none());
}

#[test]
fn test_delete_user_leaves_unrelated_session_alone() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    let carla = users.register(&registration("carla", "carla@example.com")).unwrap();
    let nadia = users.register(&registration("nadia", "nadia@example.com")).unwrap();

    users.set_current_user(Some(&nadia)).unwrap();
    users.delete_user(&carla.id).unwrap();

    assert_eq!(users.current_user().unwrap().id, nadia.id);
}

#[test]
fn test_delete_nonexistent_user_is_harmless() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));
    let reviews = ReviewService::new(Arc::clone(&store));

    let carla = users.register(&registration("carla", "carla@example.com")).unwrap();
    reviews.upsert_review(&review("52772", &carla.id, "good")).unwrap();

    users.delete_user("no-such-id").unwrap();

    assert_eq!(users.list_users().len(), 1);
    assert_eq!(reviews.list_reviews().len(), 1);
    assert_eq!(users.current_user().unwrap().id, carla.id);
}

// ============================================================================
// Session Pointer
// ============================================================================

/// The pointer is an independent key with no referential integrity against
/// the user collection: a dangling reference is representable by design.
#[test]
fn test_session_pointer_can_dangle() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    let ghost = User::new("ghost", "ghost@example.com", "secret1");
    users.set_current_user(Some(&ghost)).unwrap();

    assert!(users.list_users().is_empty());
    assert_eq!(users.current_user().unwrap().id, ghost.id);

    // The cascade path still clears it
    users.delete_user(&ghost.id).unwrap();
    assert!(users.current_user().is_none());
}

// ============================================================================
// Review Upsert
// ============================================================================

#[test]
fn test_review_resubmission_reuses_id_and_keeps_latest_comment() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let reviews = ReviewService::new(Arc::clone(&store));

    let first = reviews.upsert_review(&review("52772", "u1", "solid")).unwrap();
    let second = reviews.upsert_review(&review("52772", "u1", "better the second time")).unwrap();

    assert_eq!(first.id, second.id);

    let stored = reviews.list_reviews();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[0].comment, "better the second time");
}

// ============================================================================
// Recipe Cache
// ============================================================================

#[test]
fn test_recipe_cache_merges_and_never_removes() {
    use ladle_core::adapters::demo::DemoCatalog;
    use ladle_core::services::RecipeService;

    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let recipes = RecipeService::new(Arc::clone(&store), Arc::new(DemoCatalog::new()));

    let canned = demo_recipes();
    recipes.put_many(&canned[..3]).unwrap();
    assert_eq!(recipes.cached_count(), 3);

    // Merging a modified copy overwrites without touching the others
    let mut changed = canned[0].clone();
    changed.name = "Changed".to_string();
    recipes.put_many(std::slice::from_ref(&changed)).unwrap();

    assert_eq!(recipes.cached_count(), 3);
    assert_eq!(recipes.cached(&changed.id).unwrap().name, "Changed");
    assert_eq!(recipes.cached(&canned[1].id).unwrap().name, canned[1].name);
}

/// Stale-forever policy: entries persist across reopen and nothing expires
#[test]
fn test_recipe_cache_survives_reopen() {
    use ladle_core::adapters::demo::DemoCatalog;
    use ladle_core::services::RecipeService;

    let temp_dir = TempDir::new().unwrap();
    let canned = demo_recipes();

    {
        let store = open_store(&temp_dir);
        let recipes = RecipeService::new(store, Arc::new(DemoCatalog::new()));
        recipes.put_many(&canned[..1]).unwrap();
    }

    let store = open_store(&temp_dir);
    let recipes = RecipeService::new(store, Arc::new(DemoCatalog::new()));
    assert_eq!(recipes.cached(&canned[0].id).unwrap().name, canned[0].name);
}

// ============================================================================
// Corruption Recovery
// ============================================================================

#[test]
fn test_corrupt_blob_recovers_with_default_and_stays_writable() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    store.write_raw("ladle.users", "][ definitely not json").unwrap();

    // Reading falls back to the default instead of failing
    assert!(users.list_users().is_empty());

    // The collection is usable again after the next write
    users.register(&registration("carla", "carla@example.com")).unwrap();
    assert_eq!(users.list_users().len(), 1);
}

#[test]
fn test_register_after_corrupt_session_blob() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    store.write_raw("ladle.session", "<garbage>").unwrap();
    assert!(users.current_user().is_none());

    let user = users.register(&registration("carla", "carla@example.com")).unwrap();
    assert_eq!(users.current_user().unwrap().id, user.id);
}

// ============================================================================
// Cookbook Writes
// ============================================================================

#[test]
fn test_bookmark_upserts_and_refreshes_session_copy() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    users.register(&registration("carla", "carla@example.com")).unwrap();

    users.bookmark("52772", "first impression").unwrap();
    users.bookmark("52772", "second impression").unwrap();
    users.bookmark("52771", "").unwrap();

    let stored = &users.list_users()[0];
    assert_eq!(stored.cookbook.len(), 2);
    assert_eq!(stored.cookbook[0].note, "second impression");

    // The session pointer holds the refreshed copy, not a stale one
    let session = users.current_user().unwrap();
    assert_eq!(session.cookbook.len(), 2);

    users.unbookmark("52772").unwrap();
    assert_eq!(users.current_user().unwrap().cookbook.len(), 1);
}

#[test]
fn test_note_update_requires_existing_entry() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let users = UserService::new(Arc::clone(&store));

    users.register(&registration("carla", "carla@example.com")).unwrap();

    let result = users.set_note("52772", "no such bookmark");
    assert!(matches!(result, Err(Error::NotFound(_))));
}
