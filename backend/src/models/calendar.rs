//! Calendar enumerations shared by every usage dataset.
//!
//! Weekdays are coded `0 = Sunday … 6 = Saturday` in the raw extracts. Charts
//! never render them in code order; they use one of the two canonical
//! sequences exposed here ([`Weekday::MONDAY_FIRST`] for usage charts and
//! [`Weekday::SUNDAY_FIRST`] for the RFM breakdown).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week.
///
/// Declaration order is Sunday-first so the derived `Ord` matches the raw
/// weekday code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Order used by the weekday bar chart, the heatmap rows and the
    /// casual/registered chart.
    pub const MONDAY_FIRST: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Order used by the RFM charts (same as the raw code order).
    pub const SUNDAY_FIRST: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Decode a raw weekday code (`0 = Sunday`).
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::SUNDAY_FIRST.get(idx).copied())
    }

    /// Day of the week `date` falls on.
    pub fn of_date(date: NaiveDate) -> Self {
        Self::SUNDAY_FIRST[date.weekday().num_days_from_sunday() as usize]
    }

    /// Raw weekday code (`0 = Sunday`).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Position of this day in [`Weekday::MONDAY_FIRST`].
    pub fn monday_first_index(self) -> usize {
        (self.code() as usize + 6) % 7
    }

    /// Position of this day in [`Weekday::SUNDAY_FIRST`].
    pub fn sunday_first_index(self) -> usize {
        self.code() as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Look a day up by its English name or three-letter abbreviation,
    /// ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        Self::SUNDAY_FIRST.iter().copied().find(|day| {
            let full = day.name().to_ascii_lowercase();
            lowered == full || (lowered.len() == 3 && full.starts_with(&lowered))
        })
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepts either a numeric code or a day name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code)
                .ok_or_else(|| format!("weekday code {} is outside 0..=6", code));
        }
        Self::from_name(trimmed).ok_or_else(|| format!("unknown weekday '{}'", trimmed))
    }
}

/// Binary classification of a date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::Weekday, DayType::Weekend];

    pub fn name(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }

    pub fn of(weekday: Weekday) -> Self {
        if weekday.is_weekend() {
            DayType::Weekend
        } else {
            DayType::Weekday
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DayType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown day type '{}'", trimmed))
    }
}

/// First calendar year covered by the extracts; `yr = 0` maps here.
pub const BASE_YEAR: i32 = 2011;

/// Number of coded years in the extracts (`yr` is 0 or 1).
const CODED_YEARS: i64 = 2;

/// Decode the `yr` column into a calendar year.
///
/// The extracts store `0` for 2011 and `1` for 2012; the literal years are
/// accepted as well.
pub fn year_from_code(code: i64) -> Option<i32> {
    let last_year = BASE_YEAR as i64 + CODED_YEARS - 1;
    match code {
        c if (0..CODED_YEARS).contains(&c) => Some(BASE_YEAR + c as i32),
        c if (BASE_YEAR as i64..=last_year).contains(&c) => Some(c as i32),
        _ => None,
    }
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviated month label for `month` in `1..=12`.
pub fn month_label(month: u8) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_LABELS.get(idx as usize).copied())
}
