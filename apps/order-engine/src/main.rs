//! Order Engine Binary
//!
//! Composition root: loads configuration, wires a data access backend into
//! the order processor, and processes a sample order.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-engine
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_ENGINE_CONFIG`: Path to the YAML config (default: `config.yaml` if present)
//! - `RUST_LOG`: Log level (overrides `observability.logging.level`)

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use order_engine::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use order_engine::telemetry::init_tracing;
use order_engine::{Container, CreateOrderCommand, Money, Order, Product};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = resolve_config()?;
    init_tracing(&config.observability.logging);

    tracing::info!(
        backend = ?config.persistence.backend,
        "Starting order engine"
    );

    let container = Container::from_config(&config.persistence);
    let processor = container.order_processor();

    processor
        .initialize_schema()
        .await
        .context("failed to initialize order schema")?;

    let item = Arc::new(Product::new(
        "DEMO-001",
        "Sample item",
        Money::from_cents(1000),
    ));
    let order = Order::new(CreateOrderCommand::single(item)).context("invalid sample order")?;

    let receipt = processor
        .process_order(&order)
        .await
        .context("failed to process sample order")?;

    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

/// Config from `ORDER_ENGINE_CONFIG`, else `config.yaml` when present, else defaults.
fn resolve_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var("ORDER_ENGINE_CONFIG") {
        return load_config(Some(&path)).with_context(|| format!("failed to load {path}"));
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_config(None).context("failed to load config.yaml");
    }

    Ok(Config::default())
}
