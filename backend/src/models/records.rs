//! Typed rows for the four usage extracts.
//!
//! Rows are validated once at the load boundary (see [`crate::parsing`]) and
//! never mutated afterwards; the pipeline only filters and aggregates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{DayType, Weekday};
use super::filter::{DatasetBounds, UsageFilter};

/// A row that can be selected by a (date range, hour range) predicate.
pub trait UsageRecord {
    fn date(&self) -> NaiveDate;

    /// Hour bucket of the row, or `None` for daily-grain rows.
    fn hour(&self) -> Option<u8>;
}

/// One row of the daily-hourly summary (`daily_hours_df.csv`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHourRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub weekday: Weekday,
    pub count: u64,
}

/// One row of the hourly detail extract (`hours_df.csv`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u8,
    /// Calendar year, already decoded from the `yr` flag.
    pub year: i32,
    pub month: u8,
    pub weekday: Weekday,
    pub casual: u64,
    pub registered: u64,
    pub count: u64,
}

/// One row of the day-type hourly summary (`day_type_hours_df.csv`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTypeHourRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub day_type: DayType,
    pub count: u64,
}

/// One row of the customer-type summary (`cust_type_df.csv`).
///
/// Extracts without an `hour` column are daily-grain; those rows always
/// pass the hour predicate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerTypeRecord {
    pub date: NaiveDate,
    pub hour: Option<u8>,
    pub weekday: Weekday,
    pub casual: u64,
    pub registered: u64,
}

macro_rules! impl_hourly_usage_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl UsageRecord for $ty {
                fn date(&self) -> NaiveDate {
                    self.date
                }

                fn hour(&self) -> Option<u8> {
                    Some(self.hour)
                }
            }
        )+
    };
}

impl_hourly_usage_record!(DailyHourRecord, HourlyRecord, DayTypeHourRecord);

impl UsageRecord for CustomerTypeRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn hour(&self) -> Option<u8> {
        self.hour
    }
}

/// The four extracts held together for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageDatasets {
    pub daily_hours: Vec<DailyHourRecord>,
    pub hours: Vec<HourlyRecord>,
    pub day_type_hours: Vec<DayTypeHourRecord>,
    pub customer_types: Vec<CustomerTypeRecord>,
}

/// Row counts per extract, reported by the health endpoint and alongside
/// every dashboard response.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRowCounts {
    pub daily_hours: usize,
    pub hours: usize,
    pub day_type_hours: usize,
    pub customer_types: usize,
}

impl UsageDatasets {
    pub fn new(
        daily_hours: Vec<DailyHourRecord>,
        hours: Vec<HourlyRecord>,
        day_type_hours: Vec<DayTypeHourRecord>,
        customer_types: Vec<CustomerTypeRecord>,
    ) -> Self {
        Self {
            daily_hours,
            hours,
            day_type_hours,
            customer_types,
        }
    }

    pub fn row_counts(&self) -> DatasetRowCounts {
        DatasetRowCounts {
            daily_hours: self.daily_hours.len(),
            hours: self.hours.len(),
            day_type_hours: self.day_type_hours.len(),
            customer_types: self.customer_types.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.daily_hours.is_empty()
            && self.hours.is_empty()
            && self.day_type_hours.is_empty()
            && self.customer_types.is_empty()
    }

    /// Global date span used to seed the default filter.
    ///
    /// Taken from the daily-hourly summary, which drives the date picker; the
    /// other extracts are only consulted when that one is empty.
    pub fn bounds(&self) -> Option<DatasetBounds> {
        DatasetBounds::of(&self.daily_hours)
            .or_else(|| DatasetBounds::of(&self.hours))
            .or_else(|| DatasetBounds::of(&self.day_type_hours))
            .or_else(|| DatasetBounds::of(&self.customer_types))
    }

    /// Apply one filter to every extract.
    pub fn filtered(&self, filter: &UsageFilter) -> UsageDatasets {
        use crate::transformations::filtering::apply_filter;

        UsageDatasets {
            daily_hours: apply_filter(&self.daily_hours, filter),
            hours: apply_filter(&self.hours, filter),
            day_type_hours: apply_filter(&self.day_type_hours, filter),
            customer_types: apply_filter(&self.customer_types, filter),
        }
    }
}
