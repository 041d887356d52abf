//! Dataset storage behind the repository pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / binary                                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                             │
//! │  - Health, bounds, default filter                        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │   (CSV extracts loaded once, in memory)       │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use bikeshare_rust::config::DashboardConfig;
//! use bikeshare_rust::db;
//!
//! async fn example() -> anyhow::Result<()> {
//!     db::init_repository(&DashboardConfig::load()?)?;
//!     let repo = db::get_repository()?;
//!     let bounds = db::get_dataset_bounds(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{get_dataset_bounds, get_default_filter, get_row_counts, health_check};

pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, UsageRepository};

use anyhow::{Context, Result};
use log::info;
use std::sync::{Arc, OnceLock};

use crate::config::DashboardConfig;

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn UsageRepository>> = OnceLock::new();

/// Load the configured extracts into the global repository.
///
/// Calling it again after a successful load is a no-op.
pub fn init_repository(config: &DashboardConfig) -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let paths = config.data_paths();
    info!("Loading datasets from {}", config.data.dir.display());
    let repo = LocalRepository::from_paths(&paths)
        .map_err(anyhow::Error::new)
        .context("Failed to initialize repository")?;
    let _ = REPOSITORY.set(Arc::new(repo));
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn UsageRepository>> {
    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
