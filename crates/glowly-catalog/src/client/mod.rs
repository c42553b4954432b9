//! HTTP client for the upstream product catalog.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use glowly_core::ProductId;

use crate::error::CatalogError;
use crate::types::{CatalogPage, CatalogProduct};

/// Public catalog the storefront reads from when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// HTTP client for the catalog's JSON endpoints.
///
/// Every call is a single attempt bounded by the configured request timeout.
/// A 404 surfaces as [`CatalogError::NotFound`] and any other non-2xx status
/// as [`CatalogError::UnexpectedStatus`]; deciding whether that means "empty"
/// or "failure" is left to [`crate::Catalog`].
#[derive(Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client with the given request timeout and `User-Agent`.
    ///
    /// `base_url` may carry a path prefix (`https://host/api`); endpoints are
    /// appended beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches a single product by id (`GET /products/{id}`).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] when the upstream has no such product.
    /// - [`CatalogError::UnexpectedStatus`] for any other non-2xx status.
    /// - [`CatalogError::Http`] on network failure or timeout.
    /// - [`CatalogError::Deserialize`] if the body is not a product record.
    pub async fn fetch_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        let url = self.endpoint_url(&["products", &id.to_string()], &[])?;
        self.get_json(url, &format!("product {id}")).await
    }

    /// Fetches one category bucket (`GET /products/category/{slug}?limit=N`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_product`].
    pub async fn fetch_category(&self, slug: &str, limit: u32) -> Result<CatalogPage, CatalogError> {
        let url = self.endpoint_url(
            &["products", "category", slug],
            &[("limit", limit.to_string())],
        )?;
        self.get_json(url, &format!("category {slug}")).await
    }

    /// Fetches the first page of the unfiltered listing (`GET /products?limit=N`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_product`].
    pub async fn fetch_listing(&self, limit: u32) -> Result<CatalogPage, CatalogError> {
        let url = self.endpoint_url(&["products"], &[("limit", limit.to_string())])?;
        self.get_json(url, "product listing").await
    }

    /// Runs a free-text search (`GET /products/search?q=...&limit=N`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_product`].
    pub async fn search_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<CatalogPage, CatalogError> {
        let url = self.endpoint_url(
            &["products", "search"],
            &[("q", query.to_owned()), ("limit", limit.to_string())],
        )?;
        self.get_json(url, &format!("search \"{query}\"")).await
    }

    /// Builds an endpoint URL under the base, percent-encoding each path
    /// segment and query value.
    fn endpoint_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, CatalogError> {
        tracing::debug!(%url, "requesting catalog endpoint");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
