//! Read-only catalog commands.

use anyhow::Context;

use glowly_catalog::{filter_and_sort, list_categories, Catalog, CatalogClient, SortOrder};
use glowly_core::{
    category_label, default_categories, format_price, format_rating, load_categories, truncate,
    AppConfig, Product, ALL_CATEGORIES,
};

const TITLE_WIDTH: usize = 36;

pub(crate) fn build_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let categories = match &config.categories_path {
        Some(path) => load_categories(path)
            .with_context(|| format!("failed to load categories from {}", path.display()))?,
        None => default_categories(),
    };

    let client = CatalogClient::new(
        &config.catalog_base_url,
        config.catalog_timeout_secs,
        &config.catalog_user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    tracing::info!(
        base_url = %config.catalog_base_url,
        categories = categories.len(),
        "catalog ready"
    );
    Ok(Catalog::new(client, categories))
}

/// One line of a product grid.
pub(crate) fn product_row(product: &Product) -> String {
    let mut row = format!(
        "{:>5}  {:<width$}  {:>14}  ★ {} ({})",
        product.id,
        truncate(&product.title, TITLE_WIDTH),
        format_price(product.price),
        format_rating(product.rating.rate),
        product.rating.count,
        width = TITLE_WIDTH + 1,
    );

    if let Some(pct) = product.discount_percent() {
        row.push_str(&format!("  -{pct}%"));
    }
    if let Some(badge) = product.badge {
        row.push_str(&format!("  [{badge}]"));
    }
    row
}

fn print_grid(products: &[Product]) {
    for product in products {
        println!("{}", product_row(product));
    }
}

pub(crate) async fn run_products(catalog: &Catalog, category: Option<&str>, sort: SortOrder) {
    let category = category.unwrap_or(ALL_CATEGORIES);
    let products = catalog.list_all().await;
    let shown = filter_and_sort(&products, category, sort);

    println!(
        "{} · {} · {} products",
        category_label(category, catalog.categories()),
        sort.label(),
        shown.len()
    );
    if shown.is_empty() {
        println!("no products found");
        return;
    }
    print_grid(&shown);
}

pub(crate) async fn run_product(catalog: &Catalog, id: u64) {
    let Some(product) = catalog.get_by_id(id).await else {
        println!("product {id} not found");
        return;
    };

    println!("{}", product.title);
    println!(
        "{} · ★ {} ({} sold)",
        category_label(&product.category, catalog.categories()),
        format_rating(product.rating.rate),
        product.rating.count
    );
    match product.original_price {
        Some(original) => println!(
            "{}  (was {})",
            format_price(product.price),
            format_price(original)
        ),
        None => println!("{}", format_price(product.price)),
    }
    if let Some(badge) = product.badge {
        println!("[{badge}]");
    }
    println!();
    println!("{}", product.description);

    let related = catalog.list_related(&product.category, product.id).await;
    if !related.is_empty() {
        println!();
        println!("You may also like:");
        print_grid(&related);
    }
}

pub(crate) async fn run_featured(catalog: &Catalog) {
    let featured = catalog.list_featured().await;
    if featured.is_empty() {
        println!("no featured products available");
        return;
    }
    print_grid(&featured);
}

pub(crate) async fn run_related(catalog: &Catalog, category: &str, exclude: u64) {
    print_grid(&catalog.list_related(category, exclude).await);
}

pub(crate) async fn run_search(catalog: &Catalog, query: &str) -> anyhow::Result<()> {
    let results = catalog
        .search(query)
        .await
        .context("search is temporarily unavailable, please try again")?;

    if results.is_empty() {
        println!("no products match \"{}\"", query.trim());
        return Ok(());
    }
    print_grid(&results);
    Ok(())
}

pub(crate) async fn run_categories(catalog: &Catalog) {
    let products = catalog.list_all().await;
    for slug in list_categories(&products) {
        println!("{slug:<16} {}", category_label(&slug, catalog.categories()));
    }
}
