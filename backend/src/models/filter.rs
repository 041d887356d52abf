//! The user-selected predicate: an inclusive date range and an inclusive
//! hour range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::records::UsageRecord;

/// First and last hour bucket of a day.
pub const FIRST_HOUR: u8 = 0;
pub const LAST_HOUR: u8 = 23;

/// Number of hour buckets per day.
pub const HOURS_PER_DAY: usize = 24;

/// Inclusive date range. `start > end` is allowed and matches nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Inclusive hour range.
///
/// Endpoints are kept as received; values outside `0..=23` simply widen or
/// empty the predicate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: i32,
    pub end: i32,
}

impl HourRange {
    pub const ALL_DAY: HourRange = HourRange {
        start: FIRST_HOUR as i32,
        end: LAST_HOUR as i32,
    };

    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u8) -> bool {
        let hour = i32::from(hour);
        self.start <= hour && hour <= self.end
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::ALL_DAY
    }
}

/// Global date span of the loaded data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl DatasetBounds {
    /// Min/max date over `records`, or `None` when empty.
    pub fn of<R: UsageRecord>(records: &[R]) -> Option<Self> {
        let mut dates = records.iter().map(UsageRecord::date);
        let first = dates.next()?;
        let (min_date, max_date) =
            dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self { min_date, max_date })
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.min_date, self.max_date)
    }
}

/// Date range + hour range predicate applied to every extract.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageFilter {
    pub dates: DateRange,
    pub hours: HourRange,
}

impl UsageFilter {
    pub fn new(dates: DateRange, hours: HourRange) -> Self {
        Self { dates, hours }
    }

    /// Default selection: the whole dataset span, every hour.
    pub fn full(bounds: &DatasetBounds) -> Self {
        Self::new(bounds.date_range(), HourRange::ALL_DAY)
    }

    /// Filter that matches any date. Used when no data is loaded and the
    /// caller left the dates open.
    pub fn unbounded() -> Self {
        Self::new(DateRange::new(NaiveDate::MIN, NaiveDate::MAX), HourRange::ALL_DAY)
    }

    pub fn matches<R: UsageRecord + ?Sized>(&self, record: &R) -> bool {
        self.dates.contains(record.date())
            && record.hour().map_or(true, |hour| self.hours.contains(hour))
    }

    /// Build a filter from raw, optional request parameters.
    ///
    /// Omitted dates fall back to `bounds` (or to an unbounded range when no
    /// data is loaded); omitted hours fall back to `0` and `23`.
    pub fn resolve(
        start_date: Option<&str>,
        end_date: Option<&str>,
        start_hour: Option<&str>,
        end_hour: Option<&str>,
        bounds: Option<&DatasetBounds>,
    ) -> Result<Self, FilterError> {
        let default = bounds.map(Self::full).unwrap_or_else(Self::unbounded);

        let start = parse_date_param("start_date", start_date)?.unwrap_or(default.dates.start);
        let end = parse_date_param("end_date", end_date)?.unwrap_or(default.dates.end);
        let first = parse_hour_param("start_hour", start_hour)?.unwrap_or(default.hours.start);
        let last = parse_hour_param("end_hour", end_hour)?.unwrap_or(default.hours.end);

        Ok(Self::new(DateRange::new(start, end), HourRange::new(first, last)))
    }
}

/// Rejected request parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid {field} '{value}': expected a YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid {field} '{value}': expected an integer hour")]
    InvalidHour { field: &'static str, value: String },
}

fn parse_date_param(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, FilterError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| FilterError::InvalidDate {
                field,
                value: value.to_string(),
            }),
    }
}

fn parse_hour_param(field: &'static str, raw: Option<&str>) -> Result<Option<i32>, FilterError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<i32>()
            .map(Some)
            .map_err(|_| FilterError::InvalidHour {
                field,
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds() -> DatasetBounds {
        DatasetBounds {
            min_date: date(2011, 1, 1),
            max_date: date(2012, 12, 31),
        }
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let dates = DateRange::new(date(2011, 1, 1), date(2011, 1, 7));
        assert!(dates.contains(date(2011, 1, 1)));
        assert!(dates.contains(date(2011, 1, 7)));
        assert!(!dates.contains(date(2011, 1, 8)));

        let hours = HourRange::new(8, 8);
        assert!(hours.contains(8));
        assert!(!hours.contains(7));
        assert!(!hours.contains(9));
    }

    #[test]
    fn test_inverted_ranges_match_nothing() {
        let dates = DateRange::new(date(2011, 2, 1), date(2011, 1, 1));
        assert!(!dates.contains(date(2011, 1, 15)));
        let hours = HourRange::new(10, 5);
        assert!((0..=23).all(|h| !hours.contains(h)));
    }

    #[test]
    fn test_resolve_defaults_to_bounds() {
        let filter = UsageFilter::resolve(None, None, None, None, Some(&bounds())).unwrap();
        assert_eq!(filter, UsageFilter::full(&bounds()));
        assert_eq!(filter.hours, HourRange::ALL_DAY);
    }

    #[test]
    fn test_resolve_partial_parameters() {
        let filter = UsageFilter::resolve(
            Some("2011-06-01"),
            None,
            Some("8"),
            Some(""),
            Some(&bounds()),
        )
        .unwrap();
        assert_eq!(filter.dates.start, date(2011, 6, 1));
        assert_eq!(filter.dates.end, date(2012, 12, 31));
        assert_eq!(filter.hours, HourRange::new(8, 23));
    }

    #[test]
    fn test_resolve_rejects_malformed_values() {
        let err = UsageFilter::resolve(Some("01/06/2011"), None, None, None, Some(&bounds()))
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidDate { field: "start_date", .. }));

        let err =
            UsageFilter::resolve(None, None, None, Some("noon"), Some(&bounds())).unwrap_err();
        assert!(matches!(err, FilterError::InvalidHour { field: "end_hour", .. }));
    }

    #[test]
    fn test_resolve_without_data_is_unbounded() {
        let filter = UsageFilter::resolve(None, None, None, None, None).unwrap();
        assert!(filter.dates.contains(date(1990, 1, 1)));
        assert!(filter.dates.contains(date(2100, 1, 1)));
    }

    #[test]
    fn test_dataset_bounds_of_empty() {
        let records: Vec<crate::models::DailyHourRecord> = vec![];
        assert!(DatasetBounds::of(&records).is_none());
    }
}
