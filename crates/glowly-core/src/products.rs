use serde::{Deserialize, Serialize};

/// Upstream catalog product identifier.
pub type ProductId = u64;

/// A catalog product, normalized from the upstream record.
///
/// The optional fields (`original_price`, `badge`) are derived by the
/// catalog normalizer and nothing else writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Upstream category slug, e.g. `"skin-care"`; used for filtering.
    pub category: String,
    /// Primary image URI (the upstream thumbnail).
    pub image: String,
    /// Gallery image URIs in upstream order; empty when none were supplied.
    #[serde(default)]
    pub images: Vec<String>,
    /// Current price in catalog units.
    pub price: f64,
    /// Price before discount, present only when the upstream reports one.
    /// Always strictly greater than `price` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// `true` when the rating is at least 4.7.
    pub featured: bool,
}

impl Product {
    /// Rounded discount percentage shown on the product card, if discounted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn discount_percent(&self) -> Option<i64> {
        self.original_price
            .filter(|original| *original > 0.0)
            .map(|original| (((original - self.price) / original) * 100.0).round() as i64)
    }

    /// Absolute saving versus the original price; `0.0` when not discounted.
    #[must_use]
    pub fn discount_amount(&self) -> f64 {
        self.original_price
            .map_or(0.0, |original| original - self.price)
    }

    /// The compact form stored by the cart and the wishlist.
    #[must_use]
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating in `[0, 5]`, rounded to one decimal.
    pub rate: f64,
    /// Popularity proxy. The upstream has no review count, so this is
    /// synthesized from stock (`stock * 12`) and carries no review meaning.
    pub count: u64,
}

/// Promotional label on a product card. At most one per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Hot Deal")]
    HotDeal,
    New,
    Bestseller,
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::HotDeal => write!(f, "Hot Deal"),
            Badge::New => write!(f, "New"),
            Badge::Bestseller => write!(f, "Bestseller"),
        }
    }
}

/// Id, title, price and image of a product: a wishlist entry, and the input
/// from which a cart line is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}
