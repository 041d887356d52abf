//! Parsers for the bike-sharing CSV extracts.
//!
//! This is the load boundary: every extract is read once through Polars,
//! checked against its column contract, and turned into typed rows. Anything
//! malformed (a missing column, an unparseable date, an out-of-range hour or
//! weekday code) is rejected here with a [`SchemaError`], so the aggregation
//! pipeline never sees it.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::parsing::csv_parser::parse_daily_hours_csv;
//! use std::path::Path;
//!
//! let rows = parse_daily_hours_csv(Path::new("dashboard/daily_hours_df.csv"))
//!     .expect("Failed to parse extract");
//! ```

pub mod csv_parser;
pub mod schema;


pub use schema::SchemaError;
