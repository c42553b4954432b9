use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the storefront, resolved once at startup.
///
/// Library crates never read the environment directly; the binary passes the
/// relevant fields into the catalog and store constructors.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Upstream catalog origin, e.g. `"https://dummyjson.com"`.
    pub catalog_base_url: String,
    pub catalog_timeout_secs: u64,
    pub catalog_user_agent: String,
    /// Optional YAML file replacing the built-in category buckets.
    pub categories_path: Option<PathBuf>,
    pub toast_ttl_ms: u64,
    pub toast_capacity: usize,
}
