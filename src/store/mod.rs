//! The application state store.
//!
//! One `AppStore` is constructed per session and passed explicitly to
//! whoever needs it; there is no ambient global instance. It owns the
//! fetched data, the user-selected filter and display state, and the
//! collaborators it synchronizes with (the remote gateway and the
//! preference slot).
//!
//! Error discipline is deliberately asymmetric: the fetch path logs and
//! propagates, the preference-load path logs and swallows.

use std::io;

use crate::api::{ApiClient, ApiError};
use crate::catalog::{
    self, CatalogStats, ExchangeSnapshot, FilterCriteria, Product,
};
use crate::prefs::{
    Currency, DisplayPreferences, PaginationPreference, PreferenceSlot, SavedPreferences,
};

pub struct AppStore {
    products: Vec<Product>,
    categories: Vec<String>,
    exchange: ExchangeSnapshot,
    display: DisplayPreferences,
    filter: FilterCriteria,
    pagination: PaginationPreference,
    api: ApiClient,
    prefs: Box<dyn PreferenceSlot>,
}

impl AppStore {
    /// A store in its "not loaded" state: empty catalog, zero rate,
    /// default display, filter, and pagination settings.
    pub fn new(api: ApiClient, prefs: Box<dyn PreferenceSlot>) -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            exchange: ExchangeSnapshot::default(),
            display: DisplayPreferences::default(),
            filter: FilterCriteria::default(),
            pagination: PaginationPreference::default(),
            api,
            prefs,
        }
    }

    /// Overlay persisted display and pagination preferences onto the
    /// current state.
    ///
    /// An absent slot, an unreadable slot, and a malformed blob all
    /// leave state untouched. This never fails the caller.
    pub fn load_preferences(&mut self) {
        let Some(raw) = self.prefs.read() else {
            tracing::debug!("no saved preferences found");
            return;
        };
        match serde_json::from_str::<SavedPreferences>(&raw) {
            Ok(saved) => {
                if let Some(display) = saved.display {
                    self.display = display;
                }
                if let Some(pagination) = saved.pagination {
                    self.pagination = pagination;
                }
                tracing::debug!("applied saved preferences");
            }
            Err(error) => {
                tracing::warn!(%error, "ignoring malformed preference blob");
            }
        }
    }

    /// Persist the current display and pagination preferences,
    /// overwriting any prior blob.
    pub fn save_preferences(&self) -> io::Result<()> {
        let saved = SavedPreferences {
            display: Some(self.display),
            pagination: Some(self.pagination),
        };
        let raw = serde_json::to_string(&saved).map_err(io::Error::other)?;
        self.prefs.write(&raw)
    }

    /// Run the startup fetch: overlay saved preferences, then issue the
    /// three remote reads concurrently and wait for all of them.
    ///
    /// State is committed all-or-nothing: products, categories, and the
    /// exchange snapshot are only assigned once every read has
    /// succeeded, and the filter's price range is then reseeded from
    /// the fetched listing (left unchanged for an empty listing). On
    /// any failure the store keeps its prior state and the error is
    /// returned after being logged.
    ///
    /// Calling this again re-runs the full fetch and resets any
    /// user-adjusted price range.
    pub async fn fetch_initial_data(&mut self) -> Result<(), ApiError> {
        self.load_preferences();

        let (products, categories, exchange) = match tokio::join!(
            self.api.fetch_products(),
            self.api.fetch_categories(),
            self.api.fetch_exchange(),
        ) {
            (Ok(p), Ok(c), Ok(e)) => (p, c, e),
            (p, c, e) => {
                let error = p
                    .err()
                    .or(c.err())
                    .or(e.err())
                    .expect("join arm without error");
                tracing::error!(endpoint = error.endpoint(), %error, "initial fetch failed");
                return Err(error);
            }
        };

        self.products = products;
        self.categories = categories;
        self.exchange = exchange;
        if let Some((min, max)) = catalog::price_bounds(&self.products) {
            self.filter.min_price = min;
            self.filter.max_price = max;
        }
        tracing::info!(
            products = self.products.len(),
            categories = self.categories.len(),
            rate = self.exchange.rate,
            "catalog loaded"
        );
        Ok(())
    }

    /// Products matching a caller-supplied criteria, in fetch order.
    ///
    /// The criteria is explicit rather than read from the store so a
    /// view can preview a selection before committing it.
    pub fn filtered_products(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        catalog::filtered_products(&self.products, criteria)
    }

    /// Summary statistics over the currently active filter.
    pub fn stats(&self) -> CatalogStats {
        catalog::stats(&self.products, &self.filter)
    }

    /// One page of the currently filtered listing.
    pub fn current_page(&self, index: usize) -> Vec<&Product> {
        let matched = catalog::filtered_products(&self.products, &self.filter);
        catalog::page(&matched, index, self.pagination.items_per_page)
    }

    /// Look up a single product by identifier (the detail view).
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // -- User intents ---------------------------------------------------------

    pub fn set_selected_categories(&mut self, categories: Vec<String>) {
        self.filter.categories = categories;
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.filter.min_price = min;
        self.filter.max_price = max;
    }

    pub fn set_primary_currency(&mut self, currency: Currency) {
        self.display.primary_currency = currency;
    }

    pub fn set_show_both_prices(&mut self, show_both: bool) {
        self.display.show_both_prices = show_both;
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.items_per_page = items_per_page;
    }

    // -- Read access ----------------------------------------------------------

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn exchange(&self) -> &ExchangeSnapshot {
        &self.exchange
    }

    pub fn display(&self) -> &DisplayPreferences {
        &self.display
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn pagination(&self) -> &PaginationPreference {
        &self.pagination
    }
}
