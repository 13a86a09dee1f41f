//! FinSight Prediction Pipeline - Main Entry Point

use api::{init_logging, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== FinSight Prediction API v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting transaction prediction service...");

    let addr = "0.0.0.0:8000";
    run_server(addr).await?;

    Ok(())
}
