//! Bike-sharing dashboard HTTP server.
//!
//! Loads the CSV extracts once, then serves the chart datasets as JSON.
//!
//! # Usage
//!
//! ```bash
//! DATA_DIR=./dashboard cargo run --bin bikeshare-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path of a `dashboard.toml` file
//! - `DATA_DIR`: Directory holding the CSV extracts (default: dashboard)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bikeshare_rust::config::DashboardConfig;
use bikeshare_rust::db;
use bikeshare_rust::http::{bind_listener, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting bike-sharing dashboard server");

    let config = DashboardConfig::load()?;

    // Load the extracts once; every request reuses them
    db::init_repository(&config)?;
    let repository = Arc::clone(db::get_repository()?);
    let counts = db::get_row_counts(repository.as_ref()).await?;
    info!(
        "Datasets loaded: {} daily-hour, {} hourly, {} day-type, {} customer-type rows",
        counts.daily_hours, counts.hours, counts.day_type_hours, counts.customer_types
    );

    let state = AppState::new(repository);
    let app = create_router(state);

    let listener = bind_listener(&config).await?;
    let addr = listener.local_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
