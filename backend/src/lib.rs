//! # Bike-Sharing Dashboard Backend
//!
//! Filter-and-aggregate engine behind an interactive bike-sharing usage
//! dashboard.
//!
//! The crate loads four pre-aggregated CSV extracts once, applies a
//! user-selected (date range, hour range) predicate, and derives the chart
//! datasets: rentals by weekday, hour, month and day type, a weekday × hour
//! heatmap, the casual/registered split and an RFM table. The datasets are
//! exposed as a REST API via Axum.
//!
//! ## Architecture
//!
//! - [`models`]: Typed rows, calendar enums and the filter predicate
//! - [`parsing`]: CSV extracts → validated rows
//! - [`io`]: Loading all extracts from a data directory
//! - [`transformations`]: Row selection
//! - [`db`]: Repository pattern over the loaded extracts
//! - [`services`]: Chart aggregations
//! - [`routes`]: Chart DTOs and route paths
//! - [`api`]: Re-exported DTOs
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use bikeshare_rust::models::{UsageDatasets, UsageFilter};
//! use bikeshare_rust::services::compute_dashboard;
//!
//! let data = UsageDatasets::default();
//! let dashboard = compute_dashboard(&data, &UsageFilter::unbounded());
//! assert_eq!(dashboard.by_weekday.totals.len(), 7);
//! assert!(dashboard.insufficient_data);
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod io;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;
pub mod transformations;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
mod api_tests;
