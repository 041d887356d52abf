use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::path::Path;

use super::schema::{self, SchemaError};
use crate::models::{
    year_from_code, CustomerTypeRecord, DailyHourRecord, DayType, DayTypeHourRecord,
    HourlyRecord, Weekday, FIRST_HOUR, LAST_HOUR,
};

/// Parse a CSV file into a Polars DataFrame
pub fn read_csv_frame(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV into DataFrame: {}", csv_path.display()))?;
    Ok(df)
}

/// Keep the contracted columns and cast them to strings.
///
/// Type inference differs between extracts (a weekday column may hold codes
/// or names, counts may come back as floats), so every cell is parsed by the
/// typed helpers below instead of trusting the inferred dtype.
fn select_contract_columns(
    df: &DataFrame,
    dataset: &'static str,
    required: &[&'static str],
    optional: &[&'static str],
) -> Result<DataFrame> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let has_column = |name: &str| column_names.iter().any(|c| c == name);

    if let Some(missing) = required.iter().find(|name| !has_column(**name)) {
        return Err(SchemaError::MissingColumn {
            dataset,
            column: *missing,
        }
        .into());
    }

    let exprs: Vec<Expr> = required
        .iter()
        .chain(optional.iter().filter(|name| has_column(**name)))
        .map(|name| col(*name).cast(DataType::String))
        .collect();

    df.clone()
        .lazy()
        .select(exprs)
        .collect()
        .with_context(|| format!("Failed to cast {} columns to strings", dataset))
}

/// String view over one contracted column.
struct Cells<'a> {
    dataset: &'static str,
    column: &'static str,
    values: &'a StringChunked,
}

impl<'a> Cells<'a> {
    fn new(df: &'a DataFrame, dataset: &'static str, column: &'static str) -> Result<Self> {
        let values = df.column(column)?.str()?;
        Ok(Self {
            dataset,
            column,
            values,
        })
    }

    /// Optional column: `None` when the extract does not carry it.
    fn optional(df: &'a DataFrame, dataset: &'static str, column: &'static str) -> Option<Self> {
        let values = df.column(column).ok()?.str().ok()?;
        Some(Self {
            dataset,
            column,
            values,
        })
    }

    fn parse<T>(&self, row: usize, parser: fn(&str) -> Result<T, String>) -> Result<T, SchemaError> {
        let raw = self
            .values
            .get(row)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(SchemaError::MissingValue {
                dataset: self.dataset,
                column: self.column,
                row,
            })?;

        parser(raw).map_err(|reason| SchemaError::InvalidValue {
            dataset: self.dataset,
            column: self.column,
            row,
            value: raw.to_string(),
            reason,
        })
    }
}

/// 2^64, the first whole float a `u64` cannot hold.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// 2^63, the first whole float an `i64` cannot hold.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Whole-number float rendering (`"8.0"`), if the cell is one.
fn parse_whole_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.fract() == 0.0)
}

/// Integer cell, tolerating float renderings of whole numbers (`"8.0"`).
fn parse_integer(raw: &str) -> Result<i64, String> {
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }
    match parse_whole_float(raw) {
        Some(value) if (-I64_LIMIT..I64_LIMIT).contains(&value) => Ok(value as i64),
        Some(_) => Err("integer is out of range".to_string()),
        None => Err("expected an integer".to_string()),
    }
}

/// `YYYY-MM-DD`, optionally followed by a time that is dropped.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .map_err(|_| "expected a YYYY-MM-DD date".to_string())
}

pub(crate) fn parse_hour(raw: &str) -> Result<u8, String> {
    let value = parse_integer(raw)?;
    u8::try_from(value)
        .ok()
        .filter(|h| (FIRST_HOUR..=LAST_HOUR).contains(h))
        .ok_or_else(|| format!("hour must be within {}..={}", FIRST_HOUR, LAST_HOUR))
}

pub(crate) fn parse_weekday(raw: &str) -> Result<Weekday, String> {
    match parse_integer(raw) {
        Ok(code) => Weekday::from_code(code)
            .ok_or_else(|| format!("weekday code {} is outside 0..=6", code)),
        Err(_) => raw.parse::<Weekday>(),
    }
}

pub(crate) fn parse_count(raw: &str) -> Result<u64, String> {
    if let Ok(value) = raw.parse::<u64>() {
        return Ok(value);
    }
    match parse_whole_float(raw) {
        Some(value) if value < 0.0 => Err("count must not be negative".to_string()),
        Some(value) if value < U64_LIMIT => Ok(value as u64),
        Some(_) => Err("count exceeds the u64 range".to_string()),
        None => Err("expected an integer".to_string()),
    }
}

pub(crate) fn parse_year(raw: &str) -> Result<i32, String> {
    let code = parse_integer(raw)?;
    year_from_code(code).ok_or_else(|| format!("unknown year code {}", code))
}

pub(crate) fn parse_month(raw: &str) -> Result<u8, String> {
    let value = parse_integer(raw)?;
    u8::try_from(value)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| "month must be within 1..=12".to_string())
}

pub(crate) fn parse_day_type(raw: &str) -> Result<DayType, String> {
    raw.parse::<DayType>()
}

/// Parse the daily-hourly summary extract.
pub fn parse_daily_hours_csv(csv_path: &Path) -> Result<Vec<DailyHourRecord>> {
    let df = read_csv_frame(csv_path)?;
    dataframe_to_daily_hours(&df)
}

/// Convert a daily-hourly summary DataFrame into typed rows
pub fn dataframe_to_daily_hours(df: &DataFrame) -> Result<Vec<DailyHourRecord>> {
    let dataset = schema::DAILY_HOURS;
    let df = select_contract_columns(df, dataset, &schema::DAILY_HOURS_COLUMNS, &[])?;

    let dates = Cells::new(&df, dataset, "dteday")?;
    let hours = Cells::new(&df, dataset, "hour")?;
    let weekdays = Cells::new(&df, dataset, "weekday")?;
    let counts = Cells::new(&df, dataset, "sum_cnt")?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(DailyHourRecord {
            date: dates.parse(i, parse_date)?,
            hour: hours.parse(i, parse_hour)?,
            weekday: weekdays.parse(i, parse_weekday)?,
            count: counts.parse(i, parse_count)?,
        });
    }
    Ok(records)
}

/// Parse the hourly detail extract.
pub fn parse_hours_csv(csv_path: &Path) -> Result<Vec<HourlyRecord>> {
    let df = read_csv_frame(csv_path)?;
    dataframe_to_hours(&df)
}

/// Convert an hourly detail DataFrame into typed rows
pub fn dataframe_to_hours(df: &DataFrame) -> Result<Vec<HourlyRecord>> {
    let dataset = schema::HOURS;
    let df = select_contract_columns(df, dataset, &schema::HOURS_COLUMNS, &[])?;

    let dates = Cells::new(&df, dataset, "dteday")?;
    let hours = Cells::new(&df, dataset, "hr")?;
    let years = Cells::new(&df, dataset, "yr")?;
    let months = Cells::new(&df, dataset, "mnth")?;
    let weekdays = Cells::new(&df, dataset, "weekday")?;
    let casual = Cells::new(&df, dataset, "casual")?;
    let registered = Cells::new(&df, dataset, "registered")?;
    let counts = Cells::new(&df, dataset, "cnt")?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(HourlyRecord {
            date: dates.parse(i, parse_date)?,
            hour: hours.parse(i, parse_hour)?,
            year: years.parse(i, parse_year)?,
            month: months.parse(i, parse_month)?,
            weekday: weekdays.parse(i, parse_weekday)?,
            casual: casual.parse(i, parse_count)?,
            registered: registered.parse(i, parse_count)?,
            count: counts.parse(i, parse_count)?,
        });
    }
    Ok(records)
}

/// Parse the day-type hourly summary extract.
pub fn parse_day_type_hours_csv(csv_path: &Path) -> Result<Vec<DayTypeHourRecord>> {
    let df = read_csv_frame(csv_path)?;
    dataframe_to_day_type_hours(&df)
}

/// Convert a day-type hourly summary DataFrame into typed rows
pub fn dataframe_to_day_type_hours(df: &DataFrame) -> Result<Vec<DayTypeHourRecord>> {
    let dataset = schema::DAY_TYPE_HOURS;
    let df = select_contract_columns(df, dataset, &schema::DAY_TYPE_HOURS_COLUMNS, &[])?;

    let dates = Cells::new(&df, dataset, "dteday")?;
    let hours = Cells::new(&df, dataset, "hour")?;
    let day_types = Cells::new(&df, dataset, "day_type")?;
    let counts = Cells::new(&df, dataset, "sum_cnt")?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(DayTypeHourRecord {
            date: dates.parse(i, parse_date)?,
            hour: hours.parse(i, parse_hour)?,
            day_type: day_types.parse(i, parse_day_type)?,
            count: counts.parse(i, parse_count)?,
        });
    }
    Ok(records)
}

/// Parse the customer-type summary extract.
pub fn parse_customer_type_csv(csv_path: &Path) -> Result<Vec<CustomerTypeRecord>> {
    let df = read_csv_frame(csv_path)?;
    dataframe_to_customer_types(&df)
}

/// Convert a customer-type summary DataFrame into typed rows.
///
/// The `hour` column is optional; when present every row must carry a valid
/// hour.
pub fn dataframe_to_customer_types(df: &DataFrame) -> Result<Vec<CustomerTypeRecord>> {
    let dataset = schema::CUSTOMER_TYPE;
    let df = select_contract_columns(
        df,
        dataset,
        &schema::CUSTOMER_TYPE_COLUMNS,
        &schema::CUSTOMER_TYPE_OPTIONAL_COLUMNS,
    )?;

    let dates = Cells::new(&df, dataset, "dteday")?;
    let hours = Cells::optional(&df, dataset, "hour");
    let weekdays = Cells::new(&df, dataset, "weekday")?;
    let casual = Cells::new(&df, dataset, "casual_sum")?;
    let registered = Cells::new(&df, dataset, "registered_sum")?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let hour = match &hours {
            Some(cells) => Some(cells.parse(i, parse_hour)?),
            None => None,
        };
        records.push(CustomerTypeRecord {
            date: dates.parse(i, parse_date)?,
            hour,
            weekday: weekdays.parse(i, parse_weekday)?,
            casual: casual.parse(i, parse_count)?,
            registered: registered.parse(i, parse_count)?,
        });
    }
    Ok(records)
}
