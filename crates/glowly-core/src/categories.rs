use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Sentinel slug meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// One upstream category bucket shown as a storefront filter tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Upstream slug, e.g. `"skin-care"`.
    pub slug: String,
    /// Label shown in the filter bar, e.g. `"Skincare"`.
    pub label: String,
}

impl Category {
    fn new(slug: &str, label: &str) -> Self {
        Self {
            slug: slug.to_owned(),
            label: label.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<Category>,
}

/// The beauty buckets the storefront aggregates when no override file is set.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("skin-care", "Skincare"),
        Category::new("beauty", "Makeup"),
        Category::new("fragrances", "Fragrances"),
    ]
}

/// Load and validate a category bucket override from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<Vec<Category>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CategoriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CategoriesFileParse)?;

    let categories: Vec<Category> = file
        .categories
        .iter()
        .map(|c| Category::new(c.slug.trim(), c.label.trim()))
        .collect();
    validate_categories(&categories)?;

    Ok(categories)
}

fn validate_categories(categories: &[Category]) -> Result<(), ConfigError> {
    if categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for category in categories {
        let slug = category.slug.as_str();
        if slug.is_empty() {
            return Err(ConfigError::Validation(
                "category slug must be non-empty".to_string(),
            ));
        }
        if slug == ALL_CATEGORIES {
            return Err(ConfigError::Validation(format!(
                "category slug '{ALL_CATEGORIES}' is reserved"
            )));
        }
        if !seen.insert(slug.to_owned()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category slug: '{slug}'"
            )));
        }
    }

    Ok(())
}

/// Display label for a category slug.
///
/// Configured buckets use their label, the sentinel is `"All"`, and any other
/// slug is title-cased word by word (`"mens-watches"` → `"Mens Watches"`).
#[must_use]
pub fn category_label(slug: &str, categories: &[Category]) -> String {
    if slug == ALL_CATEGORIES {
        return "All".to_string();
    }
    if let Some(category) = categories.iter().find(|c| c.slug == slug) {
        return category.label.clone();
    }

    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
