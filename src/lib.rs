//! Core state controller for a product catalog browser.
//!
//! The crate fetches a product listing, a category list, and a currency
//! exchange-rate snapshot from remote read-only APIs, then exposes
//! filtered, aggregated, and paginated views over that data. The
//! [`store::AppStore`] is the session context a view layer reads from
//! and dispatches intents into; [`catalog`] holds the pure derivation
//! logic; [`api`] and [`prefs`] are the two external collaborators.

pub mod api;
pub mod catalog;
pub mod prefs;
pub mod store;

pub use api::{ApiClient, ApiConfig, ApiError};
pub use catalog::{CatalogStats, ExchangeSnapshot, FilterCriteria, Product};
pub use prefs::{Currency, DisplayPreferences, FileSlot, PaginationPreference, PreferenceSlot};
pub use store::AppStore;
