//! In-memory filtering and ordering of an already-fetched product list.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

use glowly_core::{Product, ALL_CATEGORIES};

/// Product grid ordering. Parses from and displays as its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Source order (labelled "Featured" in the storefront).
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    /// Highest rating first.
    Rating,
    /// Largest absolute saving first.
    Discount,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Default,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::Rating,
        SortOrder::Discount,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Rating => "rating",
            SortOrder::Discount => "discount",
        }
    }

    /// Human label for the sort dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "Featured",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::Rating => "Best Rated",
            SortOrder::Discount => "Biggest Discount",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort order \"{0}\" (expected one of: default, price-asc, price-desc, rating, discount)")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownSortOrder(s.to_owned()))
    }
}

/// Keeps products in `category` (everything for `"all"`) and orders them.
///
/// The sort is stable, so ties keep their source order.
#[must_use]
pub fn filter_and_sort(products: &[Product], category: &str, order: SortOrder) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .cloned()
        .collect();

    match order {
        SortOrder::Default => {}
        SortOrder::PriceAsc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Rating => filtered.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
        SortOrder::Discount => {
            filtered.sort_by(|a, b| b.discount_amount().total_cmp(&a.discount_amount()));
        }
    }

    filtered
}

/// Distinct category slugs in first-seen order, prefixed with `"all"`.
#[must_use]
pub fn list_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_owned()];
    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(product.category.clone());
        }
    }
    categories
}
