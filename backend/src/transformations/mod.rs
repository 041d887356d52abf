//! Row selection over the in-memory extracts.
//!
//! # Modules
//!
//! - [`filtering`]: Apply the (date range, hour range) predicate
//!
//! # Example
//!
//! ```
//! use bikeshare_rust::models::{DateRange, HourRange, UsageFilter};
//! use bikeshare_rust::transformations::apply_filter;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
//! let filter = UsageFilter::new(DateRange::new(day, day), HourRange::new(8, 8));
//! let rows: Vec<bikeshare_rust::models::DailyHourRecord> = Vec::new();
//! assert!(apply_filter(&rows, &filter).is_empty());
//! ```

pub mod filtering;

pub use filtering::{apply_filter, count_distinct_dates};
