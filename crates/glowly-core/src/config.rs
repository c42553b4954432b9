use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config pointed at the public catalog.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("GLOWLY_ENV", "development"));
    let log_level = or_default("GLOWLY_LOG_LEVEL", "info");

    let catalog_base_url = or_default("GLOWLY_CATALOG_BASE_URL", "https://dummyjson.com");
    if !(catalog_base_url.starts_with("http://") || catalog_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "GLOWLY_CATALOG_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{catalog_base_url}\""),
        });
    }
    let catalog_timeout_secs = parse_u64("GLOWLY_CATALOG_TIMEOUT_SECS", "10")?;
    let catalog_user_agent = or_default("GLOWLY_CATALOG_USER_AGENT", "glowly/0.1 (storefront)");
    let categories_path = lookup("GLOWLY_CATEGORIES_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);

    let toast_ttl_ms = parse_u64("GLOWLY_TOAST_TTL_MS", "3500")?;
    let toast_capacity = parse_usize("GLOWLY_TOAST_CAPACITY", "4")?;
    if toast_capacity == 0 {
        return Err(ConfigError::Validation(
            "GLOWLY_TOAST_CAPACITY must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        catalog_base_url,
        catalog_timeout_secs,
        catalog_user_agent,
        categories_path,
        toast_ttl_ms,
        toast_capacity,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
