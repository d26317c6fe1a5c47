//! Tienda CLI - Browse the catalog, manage the cart and check out.
//!
//! # Usage
//!
//! ```bash
//! # Browse products
//! tienda catalog list --featured
//! tienda catalog show 1
//!
//! # Manage the cart (saved under $TIENDA_DATA_DIR, default .tienda/)
//! tienda cart add 1 --size M --color Negro
//! tienda cart add 4 --size L --color Cognac --quantity 2
//! tienda cart update 1 --size M --color Negro --quantity 3
//! tienda cart remove 1 --size M --color Negro
//! tienda cart show
//! tienda cart clear
//!
//! # Print the order summary and WhatsApp link
//! tienda checkout
//! ```
//!
//! # Commands
//!
//! - `catalog` - List and inspect products
//! - `cart` - Cart store operations
//! - `checkout` - Hand the cart off to the store's chat

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tienda_core::StaticCatalog;
use tienda_storefront::{CartStore, FileStorage, Result, StorefrontConfig};

mod commands;

use commands::cart::VariantArgs;

#[derive(Parser)]
#[command(name = "tienda")]
#[command(author, version, about = "Tienda storefront tools")]
struct Cli {
    /// Directory for the saved cart (overrides `TIENDA_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Print the order summary and chat link
    Checkout,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Only products in this category (e.g. `remeras`)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product with its sizes and colors
    Show {
        /// Product ID
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add units of a product variant
    Add {
        #[command(flatten)]
        variant: Variant,

        /// Units to add (at least 1)
        #[arg(short, long, default_value_t = NonZeroU32::MIN)]
        quantity: NonZeroU32,
    },
    /// Remove a product variant
    Remove(Variant),
    /// Set a product variant's quantity (0 or less removes it)
    Update {
        #[command(flatten)]
        variant: Variant,

        /// New quantity
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Args)]
struct Variant {
    /// Product ID
    id: String,

    /// Size (talle)
    #[arg(short, long)]
    size: String,

    /// Color
    #[arg(short, long)]
    color: String,
}

impl From<Variant> for VariantArgs {
    fn from(v: Variant) -> Self {
        Self {
            product_id: v.id,
            size: v.size,
            color: v.color,
        }
    }
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tienda=info,tienda_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let catalog = StaticCatalog::builtin()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { featured, category } => {
                commands::catalog::list(&catalog, featured, category.as_deref(), &mut out)?;
            }
            CatalogAction::Show { id } => commands::catalog::show(&catalog, &id, &mut out)?,
        },
        Commands::Cart { action } => {
            let mut store = CartStore::load(FileStorage::new(&config.data_dir));
            match action {
                CartAction::Show => commands::cart::show(&store, &mut out)?,
                CartAction::Add { variant, quantity } => {
                    let variant: VariantArgs = variant.into();
                    commands::cart::add(&mut store, &catalog, &variant, quantity, &mut out)?;
                }
                CartAction::Remove(variant) => {
                    commands::cart::remove(&mut store, &variant.into(), &mut out)?;
                }
                CartAction::Update { variant, quantity } => {
                    commands::cart::update(&mut store, &variant.into(), quantity, &mut out)?;
                }
                CartAction::Clear => commands::cart::clear(&mut store, &mut out)?,
            }
        }
        Commands::Checkout => {
            let store = CartStore::load(FileStorage::new(&config.data_dir));
            commands::checkout::run(&store, &config, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_quantity(args: &[&str]) -> Option<u32> {
        let cli = Cli::try_parse_from(args).ok()?;
        match cli.command {
            Commands::Cart {
                action: CartAction::Add { quantity, .. },
            } => Some(quantity.get()),
            _ => None,
        }
    }

    #[test]
    fn test_add_quantity_defaults_to_one() {
        let args = ["tienda", "cart", "add", "1", "-s", "M", "-c", "Negro"];
        assert_eq!(add_quantity(&args), Some(1));
    }

    #[test]
    fn test_add_quantity_must_be_positive() {
        let base = ["tienda", "cart", "add", "1", "-s", "M", "-c", "Negro", "-q"];
        assert_eq!(add_quantity(&[&base[..], &["3"]].concat()), Some(3));
        assert_eq!(add_quantity(&[&base[..], &["0"]].concat()), None);
        assert_eq!(add_quantity(&[&base[..], &["-2"]].concat()), None);
    }
}
