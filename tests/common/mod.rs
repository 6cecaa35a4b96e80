//! Shared test fixtures and helpers.

#![allow(dead_code)]

pub mod mock_api;

use std::path::PathBuf;

use tempfile::TempDir;
use vitrina::{ApiClient, AppStore, FileSlot};

use mock_api::{MockApi, MockResponse};

/// The two-product fixture from the catalog API.
pub const TWO_PRODUCTS: &str = r#"[
    {"id": 1, "title": "Mesh cap", "category": "a", "price": 10.0},
    {"id": 2, "title": "Canvas bag", "category": "b", "price": 30.0}
]"#;

pub const TWO_CATEGORIES: &str = r#"["a", "b"]"#;

/// A well-formed monitor response with a string-typed rate.
pub const BCV_RATE: &str = r#"{
    "monitors": {"bcv": {"price": "36.5", "title": "BCV"}},
    "datetime": {"date": "2024-01-01", "time": "10:00"}
}"#;

/// Seed the mock with the standard two-product fixture.
pub async fn seed_catalog(api: &MockApi) {
    api.set("/products", MockResponse::json(TWO_PRODUCTS)).await;
    api.set("/products/categories", MockResponse::json(TWO_CATEGORIES))
        .await;
    api.set("/dollar", MockResponse::json(BCV_RATE)).await;
}

/// A store wired to the mock server and a fresh file slot.
///
/// The returned `TempDir` keeps the slot alive for the test body.
pub fn store_for(api: &MockApi) -> (AppStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = store_with_slot(api, slot_path(&dir));
    (store, dir)
}

/// A store wired to the mock server and a specific slot path, for
/// tests that span "sessions" over the same slot.
pub fn store_with_slot(api: &MockApi, path: PathBuf) -> AppStore {
    AppStore::new(
        ApiClient::new(api.api_config()),
        Box::new(FileSlot::new(path)),
    )
}

pub fn slot_path(dir: &TempDir) -> PathBuf {
    dir.path().join("preferences.json")
}
