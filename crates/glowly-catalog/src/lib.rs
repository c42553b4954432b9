pub mod accessor;
pub mod client;
pub mod error;
pub mod listing;
pub mod normalize;
pub mod types;

pub use accessor::Catalog;
pub use client::CatalogClient;
pub use error::CatalogError;
pub use listing::{filter_and_sort, list_categories, SortOrder, UnknownSortOrder};
pub use normalize::normalize_product;
pub use types::{CatalogPage, CatalogProduct};
