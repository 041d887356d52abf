use log::debug;
use std::collections::BTreeMap;

use crate::api::{
    DayTypeHourPoint, HourCount, MonthlyPoint, UserType, UserTypeCount, UserTypeEntry,
    UserTypeRentals, WeekdayCount, WeekdayRentals, YearHourPoint,
};
use crate::db::repository::{RepositoryResult, UsageRepository};
use crate::models::{
    month_label, CustomerTypeRecord, DailyHourRecord, DayType, DayTypeHourRecord, HourlyRecord,
    UsageFilter, Weekday, HOURS_PER_DAY,
};

/// Sum `count` per weekday over the daily-hourly rows.
///
/// All 7 weekdays are present, Monday first; days without rows sum to 0.
pub fn compute_by_weekday(rows: &[DailyHourRecord]) -> WeekdayRentals {
    let mut sums = [0u64; 7];
    for row in rows {
        let slot = &mut sums[row.weekday.monday_first_index()];
        *slot = slot.saturating_add(row.count);
    }

    let totals: Vec<WeekdayCount> = Weekday::MONDAY_FIRST
        .iter()
        .zip(sums)
        .map(|(&weekday, count)| WeekdayCount { weekday, count })
        .collect();
    let ranked = rank_by_count(&totals);

    WeekdayRentals { totals, ranked }
}

/// Order by count, highest first. Equal counts keep their input order.
pub fn rank_by_count(totals: &[WeekdayCount]) -> Vec<WeekdayCount> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Sum `count` per hour of the day, one entry for each of the 24 hours.
pub fn compute_by_hour(rows: &[DailyHourRecord]) -> Vec<HourCount> {
    let mut sums = [0u64; HOURS_PER_DAY];
    for row in rows {
        if let Some(slot) = sums.get_mut(usize::from(row.hour)) {
            *slot = slot.saturating_add(row.count);
        }
    }

    sums.iter()
        .enumerate()
        .map(|(hour, &count)| HourCount {
            hour: hour as u8,
            count,
        })
        .collect()
}

/// Sum `count` per (year, month), observed groups only, chronological.
pub fn compute_monthly_by_year(rows: &[HourlyRecord]) -> Vec<MonthlyPoint> {
    let mut groups: BTreeMap<(i32, u8), u64> = BTreeMap::new();
    for row in rows {
        let sum = groups.entry((row.year, row.month)).or_default();
        *sum = sum.saturating_add(row.count);
    }

    groups
        .into_iter()
        .map(|((year, month), count)| MonthlyPoint {
            year,
            month,
            label: month_label(month).unwrap_or_default().to_string(),
            count,
        })
        .collect()
}

/// Sum `count` per (year, hour), observed groups only.
pub fn compute_hourly_by_year(rows: &[HourlyRecord]) -> Vec<YearHourPoint> {
    let mut groups: BTreeMap<(i32, u8), u64> = BTreeMap::new();
    for row in rows {
        let sum = groups.entry((row.year, row.hour)).or_default();
        *sum = sum.saturating_add(row.count);
    }

    groups
        .into_iter()
        .map(|((year, hour), count)| YearHourPoint { year, hour, count })
        .collect()
}

/// Sum `count` per (hour, day type), observed groups only.
pub fn compute_by_day_type(rows: &[DayTypeHourRecord]) -> Vec<DayTypeHourPoint> {
    let mut groups: BTreeMap<(u8, DayType), u64> = BTreeMap::new();
    for row in rows {
        let sum = groups.entry((row.hour, row.day_type)).or_default();
        *sum = sum.saturating_add(row.count);
    }

    groups
        .into_iter()
        .map(|((hour, day_type), count)| DayTypeHourPoint {
            hour,
            day_type,
            count,
        })
        .collect()
}

/// Casual and registered sums per weekday, in wide and long form.
pub fn compute_by_user_type(rows: &[CustomerTypeRecord]) -> UserTypeRentals {
    let mut wide: Vec<UserTypeCount> = Weekday::MONDAY_FIRST
        .iter()
        .map(|&weekday| UserTypeCount {
            weekday,
            casual: 0,
            registered: 0,
        })
        .collect();

    for row in rows {
        let entry = &mut wide[row.weekday.monday_first_index()];
        entry.casual = entry.casual.saturating_add(row.casual);
        entry.registered = entry.registered.saturating_add(row.registered);
    }

    let long = melt_user_types(&wide);
    UserTypeRentals { wide, long }
}

/// One entry per (weekday, user type), keeping the weekday order of `wide`.
pub fn melt_user_types(wide: &[UserTypeCount]) -> Vec<UserTypeEntry> {
    wide.iter()
        .flat_map(|entry| {
            UserType::ALL.iter().map(move |&user_type| UserTypeEntry {
                weekday: entry.weekday,
                user_type,
                count: entry.get(user_type),
            })
        })
        .collect()
}

// =========================================================
// Repository-backed getters
// =========================================================

pub async fn get_rentals_by_weekday<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<WeekdayRentals> {
    let rows = repo.fetch_daily_hours(filter).await?;
    debug!("by-weekday over {} rows", rows.len());
    Ok(compute_by_weekday(&rows))
}

pub async fn get_rentals_by_hour<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<Vec<HourCount>> {
    let rows = repo.fetch_daily_hours(filter).await?;
    debug!("by-hour over {} rows", rows.len());
    Ok(compute_by_hour(&rows))
}

pub async fn get_rentals_by_month<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<Vec<MonthlyPoint>> {
    let rows = repo.fetch_hours(filter).await?;
    debug!("by-month over {} rows", rows.len());
    Ok(compute_monthly_by_year(&rows))
}

pub async fn get_rentals_by_year_hour<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<Vec<YearHourPoint>> {
    let rows = repo.fetch_hours(filter).await?;
    debug!("by-year-hour over {} rows", rows.len());
    Ok(compute_hourly_by_year(&rows))
}

pub async fn get_rentals_by_day_type<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<Vec<DayTypeHourPoint>> {
    let rows = repo.fetch_day_type_hours(filter).await?;
    debug!("by-day-type over {} rows", rows.len());
    Ok(compute_by_day_type(&rows))
}

pub async fn get_rentals_by_user_type<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<UserTypeRentals> {
    let rows = repo.fetch_customer_types(filter).await?;
    debug!("by-user-type over {} rows", rows.len());
    Ok(compute_by_user_type(&rows))
}
