//! Normalization from raw upstream records to [`glowly_core::Product`].
//!
//! This module is the only writer of the derived fields: original price,
//! badge, rounded rating, popularity count, and the featured flag.

use glowly_core::{Badge, Product, Rating};

use crate::types::CatalogProduct;

/// Discount percentage at or above which a product is a "Hot Deal".
const HOT_DEAL_DISCOUNT_PCT: f64 = 20.0;
/// Rating at or above which a product is a "Bestseller".
const BESTSELLER_RATING: f64 = 4.8;
/// Rating at or above which a product is featured on the home page.
const FEATURED_RATING: f64 = 4.7;
/// Multiplier turning stock into the displayed popularity count.
const POPULARITY_PER_STOCK_UNIT: u64 = 12;

/// Normalizes a raw [`CatalogProduct`] into a [`Product`].
///
/// Never fails: records are taken best-effort, with absent numbers already
/// zeroed during deserialization.
#[must_use]
pub fn normalize_product(product: CatalogProduct) -> Product {
    let original_price = original_price(product.price, product.discount_percentage);
    let badge = badge_for(&product);

    Product {
        id: product.id,
        title: product.title,
        description: product.description,
        category: product.category,
        image: product.thumbnail,
        images: product.images,
        price: product.price,
        original_price,
        rating: Rating {
            rate: round_to(product.rating.clamp(0.0, 5.0), 1),
            count: product.stock.saturating_mul(POPULARITY_PER_STOCK_UNIT),
        },
        badge,
        featured: product.rating >= FEATURED_RATING,
    }
}

/// Reconstructs the pre-discount price, rounded to cents.
///
/// Returns `None` unless the discount is in `(0, 100)` and the rounded result
/// is strictly above the current price, so tiny discounts that round away and
/// free items never produce an "original" price equal to the sale price.
fn original_price(price: f64, discount_percentage: f64) -> Option<f64> {
    if discount_percentage <= 0.0 || discount_percentage >= 100.0 {
        return None;
    }

    let original = round_to(price / (1.0 - discount_percentage / 100.0), 2);
    (original.is_finite() && original > price).then_some(original)
}

/// First matching rule wins: discount, then the `new` tag, then rating.
fn badge_for(product: &CatalogProduct) -> Option<Badge> {
    if product.discount_percentage >= HOT_DEAL_DISCOUNT_PCT {
        Some(Badge::HotDeal)
    } else if product.tags.iter().any(|t| t == "new") {
        Some(Badge::New)
    } else if product.rating >= BESTSELLER_RATING {
        Some(Badge::Bestseller)
    } else {
        None
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
