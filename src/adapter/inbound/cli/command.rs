//! Command-line interface definitions.
//!
//! Defines the CLI structure for cartcompare using `clap`: cart management,
//! the cross-retailer price comparison and the product listing queries.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Grocery cart with a two-retailer price comparison
#[derive(Parser, Debug)]
#[command(name = "cartcompare")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the cartcompare CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the shopping cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// Compare the cart total across retailers
    Compare,

    /// Search products by title or brand
    Search(SearchArgs),

    /// List products on sale
    Sale(PageArg),

    /// List products in a category
    Category(CategoryArgs),

    /// Show one product
    Show(ProductArg),

    /// Show the weekly offers and a sample of each category
    Featured,
}

/// Subcommands for `cartcompare cart`.
#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Display the cart contents and total
    Show,
    /// Add a product from the feed to the cart
    Add(AddArgs),
    /// Remove a product from the cart
    Remove(ProductArg),
    /// Change the quantity of the line at a position
    Qty(QtyArgs),
    /// Remove every line item
    Clear,
}

/// Arguments for `cart add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Product id
    pub id: String,

    /// Units to add
    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub quantity: u32,
}

/// Arguments for `cart qty`.
#[derive(Args, Debug)]
pub struct QtyArgs {
    /// 1-based position of the line, as shown by `cart show`
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub position: u64,

    /// Amount to add; negative to decrease
    #[arg(allow_negative_numbers = true)]
    pub delta: i64,

    /// Remove without asking when the quantity would reach zero
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// A single product id argument.
#[derive(Args, Debug)]
pub struct ProductArg {
    /// Product id
    pub id: String,
}

/// Page selection shared by the listing commands.
#[derive(Args, Debug)]
pub struct PageArg {
    /// Page number, starting at 1
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,
}

/// Arguments for `search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search terms; empty matches every product
    #[arg(default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub page: PageArg,

    /// Read queries line by line from stdin and search as you type
    #[arg(long, conflicts_with = "query")]
    pub live: bool,
}

/// Arguments for `category`.
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Category slug, e.g. `Mejeri` or `Frugt_og_groent`
    pub slug: String,

    #[command(flatten)]
    pub page: PageArg,
}
