//! Remote data gateway.
//!
//! Thin wrapper over three independent read-only GET endpoints: the
//! product list, the category list, and the exchange-rate monitor. The
//! first two deserialize strictly; the exchange response is free-form
//! and degrades to defaults instead of failing, whether a field is
//! missing or the body is not JSON at all.

mod error;

pub use error::ApiError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::{ExchangeSnapshot, Product};

/// Endpoint URLs for the three remote reads.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub products_url: String,
    pub categories_url: String,
    pub exchange_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            products_url: "https://fakestoreapi.com/products".to_string(),
            categories_url: "https://fakestoreapi.com/products/categories".to_string(),
            exchange_url:
                "https://pydolarve.org/api/v2/dollar?page=alcambio&format_date=default&rounded_price=true"
                    .to_string(),
        }
    }
}

/// HTTP client for the catalog and exchange-rate APIs.
///
/// Requests carry no timeout: the store's fetch joins all three reads
/// and surfaces whatever the transport reports.
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch the full product listing.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("products", &self.config.products_url).await
    }

    /// Fetch the ordered list of category names.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("categories", &self.config.categories_url)
            .await
    }

    /// Fetch the exchange-rate monitor and extract a snapshot.
    ///
    /// Only transport failures and non-success statuses propagate. Any
    /// deviation in the body — wrong shape or not JSON at all — yields
    /// the default snapshot fields instead.
    pub async fn fetch_exchange(&self) -> Result<ExchangeSnapshot, ApiError> {
        let body = self.get_text("exchange", &self.config.exchange_url).await?;
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(parse_exchange(&value)),
            Err(error) => {
                tracing::warn!(%error, "exchange body was not JSON, using default snapshot");
                Ok(ExchangeSnapshot::default())
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { endpoint, source })
    }

    async fn get_text(&self, endpoint: &'static str, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        response
            .text()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })
    }
}

/// Extract an [`ExchangeSnapshot`] from the monitor response.
///
/// The rate lives at `monitors.bcv.price` and may arrive as a JSON
/// number or a numeric string; anything else becomes 0.0. The datetime
/// pair lives at `datetime.date` / `datetime.time` and defaults to
/// empty strings.
pub fn parse_exchange(body: &Value) -> ExchangeSnapshot {
    let rate = body
        .pointer("/monitors/bcv/price")
        .map(rate_value)
        .unwrap_or(0.0);
    let date = string_at(body, "/datetime/date");
    let time = string_at(body, "/datetime/time");
    ExchangeSnapshot { rate, date, time }
}

fn rate_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn string_at(body: &Value, pointer: &str) -> String {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
