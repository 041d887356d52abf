use serde::{Deserialize, Serialize};

use crate::models::{DayType, Weekday};

// =========================================================
// Rental count series
// =========================================================

/// Total rentals for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub weekday: Weekday,
    pub count: u64,
}

/// Weekday totals for the bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayRentals {
    /// Always 7 entries, Monday first.
    pub totals: Vec<WeekdayCount>,
    /// The same entries by count, highest first.
    pub ranked: Vec<WeekdayCount>,
}

/// Total rentals for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u8,
    pub count: u64,
}

/// One point of the monthly trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u8,
    /// Month abbreviation (`Jan` … `Dec`)
    pub label: String,
    pub count: u64,
}

/// One point of the per-year hourly line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearHourPoint {
    pub year: i32,
    pub hour: u8,
    pub count: u64,
}

/// Rentals for one (hour, day type) group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTypeHourPoint {
    pub hour: u8,
    pub day_type: DayType,
    pub count: u64,
}

/// Rider category of the customer-type extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Casual,
    Registered,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Casual, UserType::Registered];
}

/// Casual and registered totals for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTypeCount {
    pub weekday: Weekday,
    pub casual: u64,
    pub registered: u64,
}

impl UserTypeCount {
    pub fn get(&self, user_type: UserType) -> u64 {
        match user_type {
            UserType::Casual => self.casual,
            UserType::Registered => self.registered,
        }
    }
}

/// Long form of [`UserTypeCount`]: one entry per (weekday, user type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTypeEntry {
    pub weekday: Weekday,
    pub user_type: UserType,
    pub count: u64,
}

/// Casual/registered breakdown per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTypeRentals {
    /// Always 7 entries, Monday first.
    pub wide: Vec<UserTypeCount>,
    /// 14 entries, Monday first, casual before registered.
    pub long: Vec<UserTypeEntry>,
}

/// Route paths for rental series.
pub const GET_RENTALS_BY_WEEKDAY: &str = "/rentals/by-weekday";
pub const GET_RENTALS_BY_HOUR: &str = "/rentals/by-hour";
pub const GET_RENTALS_BY_MONTH: &str = "/rentals/by-month";
pub const GET_RENTALS_BY_YEAR_HOUR: &str = "/rentals/by-year-hour";
pub const GET_RENTALS_BY_DAY_TYPE: &str = "/rentals/by-day-type";
pub const GET_RENTALS_BY_USER_TYPE: &str = "/rentals/by-user-type";
