//! Storefront-facing catalog queries.
//!
//! Wraps [`CatalogClient`] with the storefront's failure policy: listings
//! degrade to empty, single lookups to `None`, and only search and browse
//! report upstream failures to the caller.

use futures::future::join_all;

use glowly_core::{Category, Product, ProductId, ALL_CATEGORIES};

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::normalize::normalize_product;

/// Products requested per category bucket for the full listing.
pub const LISTING_BUCKET_LIMIT: u32 = 6;
/// Products requested per category bucket for the empty-query search sample.
pub const SAMPLE_BUCKET_LIMIT: u32 = 4;
/// Products requested from the related category before exclusion and capping.
pub const RELATED_FETCH_LIMIT: u32 = 6;
pub const RELATED_MAX: usize = 3;
pub const FEATURED_MAX: usize = 4;
pub const SEARCH_LIMIT: u32 = 20;
pub const BROWSE_LIMIT: u32 = 12;

/// Read access to the product catalog, scoped to a fixed set of category buckets.
#[derive(Debug)]
pub struct Catalog {
    client: CatalogClient,
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub fn new(client: CatalogClient, categories: Vec<Category>) -> Self {
        Self { client, categories }
    }

    /// The category buckets this catalog aggregates.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products across every bucket, bucket by bucket in configured order.
    ///
    /// Buckets are fetched concurrently. A failed bucket contributes nothing
    /// and is logged; it never aborts the others.
    pub async fn list_all(&self) -> Vec<Product> {
        self.fetch_buckets(LISTING_BUCKET_LIMIT).await
    }

    /// Looks up one product. Absence and upstream failure both yield `None`.
    pub async fn get_by_id(&self, id: ProductId) -> Option<Product> {
        match self.client.fetch_product(id).await {
            Ok(raw) => Some(normalize_product(raw)),
            Err(CatalogError::NotFound { .. }) => {
                tracing::debug!(product_id = id, "product not found upstream");
                None
            }
            Err(e) => {
                tracing::warn!(product_id = id, error = %e, "product lookup failed");
                None
            }
        }
    }

    /// Up to four featured products, in listing order.
    pub async fn list_featured(&self) -> Vec<Product> {
        self.list_all()
            .await
            .into_iter()
            .filter(|p| p.featured)
            .take(FEATURED_MAX)
            .collect()
    }

    /// Up to three other products from `category`, excluding `exclude_id`.
    pub async fn list_related(&self, category: &str, exclude_id: ProductId) -> Vec<Product> {
        match self.client.fetch_category(category, RELATED_FETCH_LIMIT).await {
            Ok(page) => page
                .products
                .into_iter()
                .map(normalize_product)
                .filter(|p| p.id != exclude_id)
                .take(RELATED_MAX)
                .collect(),
            Err(e) => {
                tracing::warn!(category, error = %e, "related products unavailable");
                Vec::new()
            }
        }
    }

    /// Free-text search, up to twenty results in upstream order.
    ///
    /// A blank query returns a small sample from every bucket instead and
    /// does not touch the search endpoint.
    ///
    /// # Errors
    ///
    /// Propagates any [`CatalogError`] from the search request. An empty
    /// result set is `Ok(vec![])`, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(self.fetch_buckets(SAMPLE_BUCKET_LIMIT).await);
        }

        let page = self.client.search_products(query, SEARCH_LIMIT).await?;
        tracing::debug!(query, total = page.total, "search completed");

        Ok(page
            .products
            .into_iter()
            .take(SEARCH_LIMIT as usize)
            .map(normalize_product)
            .collect())
    }

    /// One page of products for a category filter, or the unfiltered listing
    /// for `None` and the `"all"` sentinel.
    ///
    /// # Errors
    ///
    /// Propagates any [`CatalogError`] from the request.
    pub async fn browse(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogError> {
        let page = match category {
            Some(slug) if slug != ALL_CATEGORIES => {
                self.client.fetch_category(slug, BROWSE_LIMIT).await?
            }
            _ => self.client.fetch_listing(BROWSE_LIMIT).await?,
        };

        Ok(page.products.into_iter().map(normalize_product).collect())
    }

    async fn fetch_buckets(&self, limit: u32) -> Vec<Product> {
        let results = join_all(
            self.categories
                .iter()
                .map(|category| self.client.fetch_category(&category.slug, limit)),
        )
        .await;

        self.categories
            .iter()
            .zip(results)
            .flat_map(|(category, result)| match result {
                Ok(page) => page.products,
                Err(e) => {
                    tracing::warn!(
                        category = %category.slug,
                        error = %e,
                        "category bucket unavailable, skipping"
                    );
                    Vec::new()
                }
            })
            .map(normalize_product)
            .collect()
    }
}
