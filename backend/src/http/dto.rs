//! Data Transfer Objects for the HTTP API.
//!
//! Chart DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Dashboard
    DashboardData,
    // Heatmap
    HeatmapRow, WeekdayHourMatrix,
    // Rentals
    DayTypeHourPoint, HourCount, MonthlyPoint, UserType, UserTypeCount, UserTypeEntry,
    UserTypeRentals, WeekdayCount, WeekdayRentals, YearHourPoint,
    // RFM
    RfmData, RfmRow, RfmWeekdaySummary,
};
use crate::models::{DatasetBounds, DatasetRowCounts, FilterError, UsageFilter};

/// Date and hour range accepted by every `/v1` endpoint.
///
/// Values arrive as raw strings so malformed input is reported with the
/// offending parameter instead of a generic extractor rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_hour: Option<String>,
    #[serde(default)]
    pub end_hour: Option<String>,
}

impl FilterQuery {
    /// Resolve against the dataset bounds; omitted values take the defaults.
    pub fn resolve(&self, bounds: Option<&DatasetBounds>) -> Result<UsageFilter, FilterError> {
        UsageFilter::resolve(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.start_hour.as_deref(),
            self.end_hour.as_deref(),
            bounds,
        )
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Loaded rows per extract
    pub datasets: DatasetRowCounts,
}

/// Dataset bounds and the filter a fresh dashboard starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsResponse {
    pub bounds: Option<DatasetBounds>,
    pub default_filter: UsageFilter,
}
