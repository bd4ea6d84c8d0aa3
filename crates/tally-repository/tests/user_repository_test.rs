//! Integration tests for SqliteUserRepository.
//!
//! These tests run against a real SQLite file in a temporary directory.

mod common;

use common::TestDatabase;
use std::sync::Arc;
use tally_core::UserId;
use tally_repository::{DatabasePoolInterface, SqliteUserRepository, UserRepository};

async fn setup() -> (TestDatabase, SqliteUserRepository) {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());
    (db, repo)
}

#[tokio::test]
async fn test_insert_creates_user_with_zero_clicks() {
    let (_db, repo) = setup().await;

    let user = repo.insert("alice").await.expect("Insert failed");

    assert_eq!(user.id, UserId::new(1));
    assert_eq!(user.username, "alice");
    assert_eq!(user.clicks, 0);
}

#[tokio::test]
async fn test_duplicate_insert_is_a_conflict_and_leaves_row_untouched() {
    let (_db, repo) = setup().await;

    let first = repo.insert("alice").await.unwrap();
    repo.set_clicks("alice", 7).await.unwrap();

    let err = repo.insert("alice").await.unwrap_err();
    assert!(err.is_conflict());

    let stored = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.clicks, 7);
    assert_eq!(stored.created_at, first.created_at);
    assert_eq!(repo.find_all_by_clicks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rejected_duplicate_does_not_consume_an_id() {
    let (_db, repo) = setup().await;

    repo.insert("alice").await.unwrap();
    for _ in 0..5 {
        assert!(repo.insert("alice").await.is_err());
    }
    let bob = repo.insert("bob").await.unwrap();

    assert_eq!(bob.id, UserId::new(2));
}

#[tokio::test]
async fn test_ids_are_assigned_in_creation_order() {
    let (_db, repo) = setup().await;

    let alice = repo.insert("alice").await.unwrap();
    let bob = repo.insert("bob").await.unwrap();

    assert!(bob.id > alice.id);
}

#[tokio::test]
async fn test_usernames_are_case_sensitive() {
    let (_db, repo) = setup().await;

    let lower = repo.insert("alice").await.unwrap();
    let upper = repo.insert("Alice").await.unwrap();

    assert_ne!(lower.id, upper.id);
    assert!(repo.find_by_username("ALICE").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_username() {
    let (_db, repo) = setup().await;
    repo.insert("findme").await.unwrap();

    let found = repo
        .find_by_username("findme")
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_eq!(found.username, "findme");
    assert_eq!(found.clicks, 0);
}

#[tokio::test]
async fn test_unknown_username_yields_none() {
    let (_db, repo) = setup().await;

    assert!(repo.find_by_username("bob").await.unwrap().is_none());
    assert!(repo.set_clicks("bob", 5).await.unwrap().is_none());
    assert!(repo.increment_clicks("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_clicks_then_read_back() {
    let (_db, repo) = setup().await;
    repo.insert("alice").await.unwrap();

    let updated = repo.set_clicks("alice", 42).await.unwrap().unwrap();
    assert_eq!(updated.clicks, 42);

    let found = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(found.clicks, 42);
}

#[tokio::test]
async fn test_set_clicks_accepts_negative_values() {
    let (_db, repo) = setup().await;
    repo.insert("alice").await.unwrap();

    let updated = repo.set_clicks("alice", -5).await.unwrap().unwrap();
    assert_eq!(updated.clicks, -5);
}

#[tokio::test]
async fn test_increment_clicks_returns_updated_row() {
    let (_db, repo) = setup().await;
    repo.insert("alice").await.unwrap();

    let first = repo.increment_clicks("alice").await.unwrap().unwrap();
    let second = repo.increment_clicks("alice").await.unwrap().unwrap();

    assert_eq!(first.clicks, 1);
    assert_eq!(second.clicks, 2);
}

#[tokio::test]
async fn test_increment_at_maximum_is_rejected_and_row_survives() {
    let (_db, repo) = setup().await;
    repo.insert("alice").await.unwrap();
    repo.insert("bob").await.unwrap();

    repo.set_clicks("alice", i64::MAX - 1).await.unwrap();
    let at_max = repo.increment_clicks("alice").await.unwrap().unwrap();
    assert_eq!(at_max.clicks, i64::MAX);

    let err = repo.increment_clicks("alice").await.unwrap_err();
    assert_eq!(err.error_code(), "COUNTER_OVERFLOW");
    assert_eq!(err.status_code(), 409);

    let stored = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.clicks, i64::MAX);

    let listed = repo.find_all_by_clicks().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].clicks, i64::MAX);
}

#[tokio::test]
async fn test_increment_from_minimum_stays_an_integer() {
    let (_db, repo) = setup().await;
    repo.insert("alice").await.unwrap();

    repo.set_clicks("alice", i64::MIN).await.unwrap();
    let user = repo.increment_clicks("alice").await.unwrap().unwrap();

    assert_eq!(user.clicks, i64::MIN + 1);
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    const CALLS: i64 = 50;

    let (_db, repo) = setup().await;
    let repo = Arc::new(repo);
    repo.insert("alice").await.unwrap();

    let tasks = (0..CALLS).map(|_| {
        let repo = Arc::clone(&repo);
        tokio::spawn(async move { repo.increment_clicks("alice").await })
    });

    for result in futures::future::join_all(tasks).await {
        result.expect("Task panicked").expect("Increment failed");
    }

    let user = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(user.clicks, CALLS);
}

#[tokio::test]
async fn test_find_all_orders_by_clicks_descending() {
    let (_db, repo) = setup().await;

    for (name, clicks) in [("three", 3), ("one", 1), ("two", 2)] {
        repo.insert(name).await.unwrap();
        repo.set_clicks(name, clicks).await.unwrap();
    }

    let clicks: Vec<i64> = repo
        .find_all_by_clicks()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.clicks)
        .collect();

    assert_eq!(clicks, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_find_all_breaks_ties_by_creation_order() {
    let (_db, repo) = setup().await;

    for name in ["carol", "alice", "bob"] {
        repo.insert(name).await.unwrap();
    }
    repo.set_clicks("bob", 5).await.unwrap();

    let names: Vec<String> = repo
        .find_all_by_clicks()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();

    assert_eq!(names, vec!["bob", "carol", "alice"]);
}

#[tokio::test]
async fn test_find_all_on_empty_store() {
    let (_db, repo) = setup().await;

    assert!(repo.find_all_by_clicks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_schema_initialization_is_idempotent() {
    let (db, repo) = setup().await;
    repo.insert("alice").await.unwrap();

    db.pool().initialize_schema().await.expect("Second bootstrap failed");

    assert!(repo.find_by_username("alice").await.unwrap().is_some());
}

#[tokio::test]
async fn test_health_check_and_close() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    pool.health_check().await.expect("Health check failed");

    pool.close().await;
    let err = pool.health_check().await.unwrap_err();
    assert_eq!(err.status_code(), 503);
}
