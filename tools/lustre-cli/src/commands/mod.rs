//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod config;
pub mod delivery;
pub mod product;
pub mod products;
pub mod wishlist;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Listing URL query string, e.g. "category=rings&maxPrice=30000".
    #[arg(long)]
    pub query: Option<String>,

    /// Category to include (repeatable).
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Metal type to include (repeatable).
    #[arg(short, long)]
    pub metal: Vec<String>,

    /// Minimum price.
    #[arg(long)]
    pub min: Option<i64>,

    /// Maximum price.
    #[arg(long)]
    pub max: Option<i64>,

    /// Price bucket from the listing sidebar (1-4).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4), conflicts_with_all = ["min", "max"])]
    pub preset: Option<u8>,

    /// Name search text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Collection: new, sale or bestseller.
    #[arg(long)]
    pub filter: Option<String>,

    /// Sort: featured, price-low, price-high, rating, newest.
    #[arg(long)]
    pub sort: Option<String>,

    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with pricing.
    Show {
        /// Coupon code to price with.
        #[arg(long)]
        coupon: Option<String>,
    },
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set a product's quantity (0 or less removes it).
    Update {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Price the cart with a coupon code.
    Coupon {
        /// Coupon code.
        code: String,
    },
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// List saved products.
    Show,
    /// Save a product.
    Add {
        /// Product ID.
        id: String,
    },
    /// Remove a saved product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Save the product if unsaved, remove it otherwise.
    Toggle {
        /// Product ID.
        id: String,
    },
    /// Move a saved product into the cart.
    MoveToCart {
        /// Product ID.
        id: String,
    },
    /// Remove every saved product.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
///
/// Missing address fields are prompted for on a terminal.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Recipient's full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Street address.
    #[arg(long)]
    pub street: Option<String>,

    /// City.
    #[arg(long)]
    pub city: Option<String>,

    /// State.
    #[arg(long)]
    pub state: Option<String>,

    /// Pincode.
    #[arg(long)]
    pub pincode: Option<String>,

    /// Payment method: upi, card, netbanking or wallet.
    #[arg(short, long, default_value = "upi")]
    pub payment: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the delivery command.
#[derive(Args)]
pub struct DeliveryArgs {
    /// Six-digit pincode.
    pub pincode: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}
