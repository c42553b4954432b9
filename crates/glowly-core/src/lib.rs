pub mod app_config;
pub mod categories;
pub mod config;
pub mod format;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::{
    category_label, default_categories, load_categories, Category, CategoriesFile, ALL_CATEGORIES,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use format::{format_price, format_rating, format_rupiah, truncate, IDR_PER_UNIT};
pub use products::{Badge, Product, ProductId, ProductSummary, Rating};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read categories file {path}: {source}")]
    CategoriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse categories file: {0}")]
    CategoriesFileParse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
