//! Catalog domain types and pure derivations.
//!
//! Everything in this module is a pure function over explicitly passed
//! state: no I/O, no handle back into the store. The store composes these
//! with its own fields; tests can drive them directly.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog entry as returned by the products endpoint.
///
/// Only `id`, `category`, and `price` carry meaning for the store.
/// Descriptive fields (`title`, `description`, `image`, ...) are passed
/// through opaquely so the view layer can render them. Price is expected
/// to be non-negative and finite; the remote API is trusted on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub category: String,
    pub price: f64,
    /// Opaque descriptive fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Point-in-time currency conversion factor: one unit of the reference
/// currency (USD) expressed in the secondary currency (Bs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeSnapshot {
    pub rate: f64,
    pub date: String,
    pub time: String,
}

impl ExchangeSnapshot {
    /// Convert a reference-currency price into the secondary currency.
    pub fn convert(&self, price: f64) -> f64 {
        price * self.rate
    }
}

/// User-selected restriction over the product list.
///
/// An empty category vector means no category restriction. The price
/// range is inclusive on both ends; `min_price > max_price` is a valid
/// criteria value that simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub categories: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            min_price: 0.0,
            max_price: 1000.0,
        }
    }
}

impl FilterCriteria {
    /// Whether a single product passes this criteria.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.iter().any(|c| *c == product.category);
        let price_ok = product.price >= self.min_price && product.price <= self.max_price;
        category_ok && price_ok
    }
}

/// Aggregate summary over a filtered product set.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total_products: usize,
    pub unique_categories: usize,
    pub average_price: f64,
}

/// Stable filter: returns the subsequence of `products` matching
/// `criteria`, preserving fetch order.
pub fn filtered_products<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}

/// Summary statistics over the products matching `criteria`.
///
/// The empty match set yields zeros across the board; in particular the
/// average is 0.0 rather than NaN.
pub fn stats(products: &[Product], criteria: &FilterCriteria) -> CatalogStats {
    let matched = filtered_products(products, criteria);
    let total_products = matched.len();
    let unique_categories = matched
        .iter()
        .map(|p| p.category.as_str())
        .collect::<HashSet<_>>()
        .len();
    let average_price = if matched.is_empty() {
        0.0
    } else {
        matched.iter().map(|p| p.price).sum::<f64>() / total_products as f64
    };
    CatalogStats {
        total_products,
        unique_categories,
        average_price,
    }
}

/// Minimum and maximum price across `products`, or `None` when the list
/// is empty. Callers use this to seed the filter range after a fetch.
pub fn price_bounds(products: &[Product]) -> Option<(f64, f64)> {
    let first = products.first()?;
    let mut min = first.price;
    let mut max = first.price;
    for p in &products[1..] {
        if p.price < min {
            min = p.price;
        }
        if p.price > max {
            max = p.price;
        }
    }
    Some((min, max))
}

/// One page of an already-filtered list. Pages are zero-indexed; an
/// out-of-range index or a zero `per_page` yields an empty page.
pub fn page<'a>(items: &[&'a Product], index: usize, per_page: usize) -> Vec<&'a Product> {
    if per_page == 0 {
        return Vec::new();
    }
    items
        .iter()
        .skip(index.saturating_mul(per_page))
        .take(per_page)
        .copied()
        .collect()
}
