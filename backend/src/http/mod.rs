//! HTTP server module.
//!
//! An axum server exposing the chart datasets as a JSON REST API. It reuses
//! the service layer, repository and DTOs from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and filter resolution                    │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Chart aggregations                                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository over the loaded extracts               │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use tokio::net::TcpListener;

use crate::config::DashboardConfig;

/// Bind the configured `host:port`. Hostnames are resolved, so
/// `HOST=localhost` works as well as a literal address.
pub async fn bind_listener(config: &DashboardConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind(config.bind_address()).await
}
