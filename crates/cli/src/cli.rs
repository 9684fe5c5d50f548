use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stockroom_inventory::Quantity;

#[derive(Parser, Debug)]
#[command(name = "stockroom", about = "Track item quantities in a JSON inventory file", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Inventory file (overrides STOCKROOM_FILE)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Low-stock threshold (overrides STOCKROOM_LOW_STOCK_THRESHOLD)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub threshold: Option<Quantity>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the demonstration workflow (default)
    Demo,
    /// Add stock to an item
    Add(StockArgs),
    /// Remove stock from an item, dropping it once depleted
    Remove(StockArgs),
    /// Show the quantity of one item
    Get(GetArgs),
    /// List items below the low-stock threshold
    Low,
    /// Print every item and its quantity
    Report,
}

#[derive(Args, Debug)]
pub struct StockArgs {
    pub item: String,
    #[arg(allow_negative_numbers = true)]
    pub quantity: Quantity,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub item: String,
}
