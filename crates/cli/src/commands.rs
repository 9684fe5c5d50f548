use std::io::{self, Write};

use stockroom_inventory::{InventoryConfig, InventoryError, InventoryStore, ItemName};

use crate::cli::{Cli, Command, GetArgs, StockArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli, InventoryConfig::from_env());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => cmd_demo(&config, &mut out),
        Command::Add(args) => cmd_add(&config, args),
        Command::Remove(args) => cmd_remove(&config, args),
        Command::Get(args) => cmd_get(&config, args, &mut out),
        Command::Low => cmd_low(&config, &mut out),
        Command::Report => cmd_report(&config, &mut out),
    }
}

/// CLI flags take precedence over the environment.
fn resolve_config(cli: &Cli, mut config: InventoryConfig) -> InventoryConfig {
    if let Some(path) = &cli.file {
        config.path = path.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.low_stock_threshold = threshold;
    }
    config
}

/// Load the configured file. A missing file starts an empty inventory; any
/// other failure aborts so the file is never overwritten with partial data.
fn open(config: &InventoryConfig) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new();
    match store.try_load(&config.path) {
        Ok(outcome) => {
            tracing::info!("Inventory data loaded from {}", outcome.path.display());
        }
        Err(err @ InventoryError::MissingFile { .. }) => {
            tracing::warn!("no existing inventory file, starting fresh: {}", err);
        }
        Err(err) => return Err(err.into()),
    }
    Ok(store)
}

fn persist(config: &InventoryConfig, store: &InventoryStore) -> anyhow::Result<()> {
    if !store.save(&config.path) {
        anyhow::bail!("inventory not saved to {}", config.path.display());
    }
    Ok(())
}

fn joined(items: &[ItemName]) -> String {
    items
        .iter()
        .map(ItemName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fixed walkthrough: a few additions and removals, then a save/reload cycle.
fn cmd_demo(config: &InventoryConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    store.add("apple", 10, None);
    store.add("banana", -2, None);
    store.add("grapes", 4, None);
    store.remove("apple", 3);
    store.remove("orange", 1);

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    let low = store.list_low_stock(config.low_stock_threshold);
    writeln!(out, "Low items: {}", joined(&low))?;

    store.save(&config.path);
    store.load(&config.path);
    store.write_report(out)?;
    Ok(())
}

fn cmd_add(config: &InventoryConfig, args: StockArgs) -> anyhow::Result<()> {
    let mut store = open(config)?;
    if store.add(&args.item, args.quantity, None) {
        persist(config, &store)?;
    }
    Ok(())
}

fn cmd_remove(config: &InventoryConfig, args: StockArgs) -> anyhow::Result<()> {
    let mut store = open(config)?;
    if store.remove(&args.item, args.quantity) {
        persist(config, &store)?;
    }
    Ok(())
}

fn cmd_get(config: &InventoryConfig, args: GetArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let store = open(config)?;
    writeln!(out, "{}", store.get_quantity(&args.item))?;
    Ok(())
}

fn cmd_low(config: &InventoryConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let store = open(config)?;
    for item in store.list_low_stock(config.low_stock_threshold) {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

fn cmd_report(config: &InventoryConfig, out: &mut impl Write) -> anyhow::Result<()> {
    open(config)?.write_report(out)?;
    Ok(())
}
