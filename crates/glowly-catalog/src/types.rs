//! Upstream catalog response types (DummyJSON-shaped `products` API).
//!
//! ## Observed shape
//!
//! ### Envelope
//! Every listing endpoint (`/products`, `/products/category/{slug}`,
//! `/products/search`) wraps results as `{products, total, skip, limit}`.
//! A single-product lookup returns the bare product object, and an unknown
//! id answers 404 with a `{"message": ...}` body.
//!
//! ### Numbers
//! `price`, `rating` and `discountPercentage` are JSON floats; `stock` is an
//! integer. `rating` is a bare average, there is no review count.
//!
//! ### Missing fields
//! Records are not validated upstream. Every field except `id` defaults to
//! zero / empty when absent so one sparse record cannot sink a whole page.

use serde::Deserialize;

use glowly_core::ProductId;

/// Listing envelope returned by the category, search, and listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// One raw product record as the upstream serves it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub description: String,

    /// Category slug, e.g. `"skin-care"`.
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default)]
    pub images: Vec<String>,

    /// Average rating, 0–5, unrounded.
    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub stock: u64,

    /// Percentage off the pre-discount price, e.g. `12.5`.
    #[serde(default)]
    pub discount_percentage: f64,

    #[serde(default)]
    pub tags: Vec<String>,
}
