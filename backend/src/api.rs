//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::heatmap::HeatmapRow;
pub use crate::routes::heatmap::WeekdayHourMatrix;
pub use crate::routes::rentals::DayTypeHourPoint;
pub use crate::routes::rentals::HourCount;
pub use crate::routes::rentals::MonthlyPoint;
pub use crate::routes::rentals::UserType;
pub use crate::routes::rentals::UserTypeCount;
pub use crate::routes::rentals::UserTypeEntry;
pub use crate::routes::rentals::UserTypeRentals;
pub use crate::routes::rentals::WeekdayCount;
pub use crate::routes::rentals::WeekdayRentals;
pub use crate::routes::rentals::YearHourPoint;
pub use crate::routes::rfm::RfmData;
pub use crate::routes::rfm::RfmRow;
pub use crate::routes::rfm::RfmWeekdaySummary;

pub use crate::models::{
    DatasetBounds, DatasetRowCounts, DateRange, DayType, HourRange, UsageFilter, Weekday,
};
