use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Weekday;

// =========================================================
// RFM types
// =========================================================

/// Recency/frequency/monetary figures for one (weekday, hour) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmRow {
    pub weekday: Weekday,
    pub hour: u8,
    /// Latest date observed in the group
    pub last_date: NaiveDate,
    /// Days between `last_date` and the latest date of the filtered data
    pub recency_days: i64,
    /// Group rentals per distinct date of the filtered data
    pub frequency: f64,
    /// Group rentals
    pub monetary: u64,
    pub casual: u64,
    pub registered: u64,
}

/// Mean RFM figures over one weekday's groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmWeekdaySummary {
    pub weekday: Weekday,
    pub groups: usize,
    pub mean_recency_days: f64,
    pub mean_frequency: f64,
    pub mean_monetary: f64,
}

/// Complete RFM dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmData {
    /// Latest date of the filtered data, `None` when it is empty
    pub reference_date: Option<NaiveDate>,
    pub distinct_dates: usize,
    /// Sorted Sunday first, then by hour.
    pub rows: Vec<RfmRow>,
    /// Always 7 entries, Sunday first.
    pub by_weekday: Vec<RfmWeekdaySummary>,
}

pub const GET_RFM: &str = "/rfm";
