//! Lustre CLI - Command line storefront for the Lustre jewellery catalog.
//!
//! Commands:
//! - `lustre products` - Browse and filter the catalog
//! - `lustre product` - Show one product
//! - `lustre categories` - List categories
//! - `lustre cart` - Manage the cart
//! - `lustre wishlist` - Manage the wishlist
//! - `lustre checkout` - Place an order
//! - `lustre delivery` - Check delivery to a pincode
//! - `lustre config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    CartArgs, CheckoutArgs, ConfigArgs, DeliveryArgs, ProductArgs, ProductsArgs, WishlistArgs,
};

/// Lustre CLI - Browse jewellery, manage your cart and wishlist, and check out
#[derive(Parser)]
#[command(name = "lustre")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    Products(ProductsArgs),

    /// Show product details
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Manage the cart
    Cart(CartArgs),

    /// Manage the wishlist
    Wishlist(WishlistArgs),

    /// Place an order for the cart
    Checkout(CheckoutArgs),

    /// Check delivery availability for a pincode
    Delivery(DeliveryArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Wishlist(args) => commands::wishlist::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Delivery(args) => commands::delivery::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug for
/// the storefront crates with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,lustre_cache=debug,lustre_commerce=debug,lustre=debug"
    } else {
        "warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
