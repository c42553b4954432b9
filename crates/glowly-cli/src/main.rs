mod browse;
mod checkout;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glowly_catalog::SortOrder;

#[derive(Debug, Parser)]
#[command(name = "glowly-cli")]
#[command(about = "Glowly Beauty storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products across the configured categories
    Products {
        /// Category slug to filter by (default: all)
        #[arg(long)]
        category: Option<String>,
        /// default, price-asc, price-desc, rating, or discount
        #[arg(long, default_value = "default")]
        sort: SortOrder,
    },
    /// Show one product and related products from its category
    Product { id: u64 },
    /// Show featured products
    Featured,
    /// List products related to a category, excluding one id
    Related {
        category: String,
        #[arg(long)]
        exclude: u64,
    },
    /// Search the catalog; with no query, show a sample from each category
    Search { query: Option<String> },
    /// List category filters present in the catalog
    Categories,
    /// Add products to a fresh cart and place the order
    Checkout {
        #[arg(required = true)]
        ids: Vec<u64>,
        /// Quantity of each product
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = glowly_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("glowly-cli ready; run with --help to list commands");
        return Ok(());
    };

    let catalog = browse::build_catalog(&config)?;
    match command {
        Commands::Products { category, sort } => {
            browse::run_products(&catalog, category.as_deref(), sort).await;
        }
        Commands::Product { id } => browse::run_product(&catalog, id).await,
        Commands::Featured => browse::run_featured(&catalog).await,
        Commands::Related { category, exclude } => {
            browse::run_related(&catalog, &category, exclude).await;
        }
        Commands::Search { query } => {
            browse::run_search(&catalog, query.as_deref().unwrap_or_default()).await?;
        }
        Commands::Categories => browse::run_categories(&catalog).await,
        Commands::Checkout { ids, quantity } => {
            checkout::run_checkout(&catalog, &config, &ids, quantity).await;
        }
    }

    Ok(())
}
