use clap::Parser;
use std::error::Error;
use tracing::info;

mod config;
mod inventory;
mod storage;
mod util;
mod warehouse;

use config::{Args, InventoryConfig};
use inventory::Inventory;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config: InventoryConfig = Args::parse().into();
    info!(
        "Starting GCS Inventory, bucket={}, destination={}",
        config.bucket,
        config.table_id()
    );

    let inventory = Inventory::builder(config).build().await?;
    let summary = inventory.run().await?;

    println!("{}", summary);

    Ok(())
}
