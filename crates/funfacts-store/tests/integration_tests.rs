//! Integration tests for funfacts-store
//!
//! These tests verify persistence of the key-value table on disk.

use funfacts_domain::KeyValueStore;
use funfacts_store::SqliteStore;
use tempfile::TempDir;

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.db");

    {
        let mut store = SqliteStore::new(&path).unwrap();
        store.set("scoreHistory", r#"[{"id":"score-1"}]"#).unwrap();
        store.set("currentScore", "{}").unwrap();
    }

    let store = SqliteStore::new(&path).unwrap();
    assert_eq!(
        store.get("scoreHistory").unwrap().as_deref(),
        Some(r#"[{"id":"score-1"}]"#)
    );
    assert_eq!(store.get("currentScore").unwrap().as_deref(), Some("{}"));
}

#[test]
fn test_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("scores.db");

    let mut store = SqliteStore::new(&path).unwrap();
    store.set("k", "v").unwrap();
    assert!(path.exists());
}

#[test]
fn test_remove_then_get() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.set("currentScore", "{}").unwrap();
    store.remove("currentScore").unwrap();
    assert!(store.get("currentScore").unwrap().is_none());
}

#[test]
fn test_unicode_values() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let value = "Caf\u{e9} \u{2014} \u{1F419}";
    store.set("k", value).unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some(value));
}
