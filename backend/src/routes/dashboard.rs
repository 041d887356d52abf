use serde::{Deserialize, Serialize};

use super::heatmap::WeekdayHourMatrix;
use super::rentals::{
    DayTypeHourPoint, HourCount, MonthlyPoint, UserTypeRentals, WeekdayRentals, YearHourPoint,
};
use super::rfm::RfmData;
use crate::models::{DatasetBounds, DatasetRowCounts, UsageFilter};

/// Every chart dataset for one filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Filter the datasets were computed with
    pub filter: UsageFilter,
    /// Global date span of the loaded data
    pub bounds: Option<DatasetBounds>,
    /// Rows of each extract that passed the filter
    pub row_counts: DatasetRowCounts,
    /// True when no hourly detail rows passed the filter
    pub insufficient_data: bool,
    pub by_weekday: WeekdayRentals,
    pub by_hour: Vec<HourCount>,
    pub by_month: Vec<MonthlyPoint>,
    pub by_year_hour: Vec<YearHourPoint>,
    pub heatmap: WeekdayHourMatrix,
    pub by_day_type: Vec<DayTypeHourPoint>,
    pub by_user_type: UserTypeRentals,
    pub rfm: RfmData,
}

pub const GET_DASHBOARD: &str = "/dashboard";
pub const GET_BOUNDS: &str = "/bounds";
