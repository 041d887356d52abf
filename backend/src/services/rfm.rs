//! Recency/frequency/monetary breakdown of hourly rentals per
//! (weekday, hour) group.

use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

use crate::api::{RfmData, RfmRow, RfmWeekdaySummary};
use crate::db::repository::{RepositoryResult, UsageRepository};
use crate::models::{HourlyRecord, UsageFilter, Weekday};
use crate::transformations::count_distinct_dates;

#[derive(Default)]
struct GroupTotals {
    last_date: Option<NaiveDate>,
    monetary: u64,
    casual: u64,
    registered: u64,
}

/// Group rentals per distinct date; 0 when there are no dates.
pub fn compute_frequency(total: u64, distinct_dates: usize) -> f64 {
    if distinct_dates == 0 {
        0.0
    } else {
        total as f64 / distinct_dates as f64
    }
}

/// Build the RFM table from filtered hourly rows.
///
/// Recency is measured against the latest date in `rows`; frequency divides
/// each group total by the number of distinct dates in `rows` as a whole.
pub fn compute_rfm(rows: &[HourlyRecord]) -> RfmData {
    let reference_date = rows.iter().map(|r| r.date).max();
    let distinct_dates = count_distinct_dates(rows);

    // Weekday's Ord is Sunday-first, so the map iterates in output order.
    let mut groups: BTreeMap<(Weekday, u8), GroupTotals> = BTreeMap::new();
    for row in rows {
        let group = groups.entry((row.weekday, row.hour)).or_default();
        group.last_date = group.last_date.max(Some(row.date));
        group.monetary = group.monetary.saturating_add(row.count);
        group.casual = group.casual.saturating_add(row.casual);
        group.registered = group.registered.saturating_add(row.registered);
    }

    let rfm_rows: Vec<RfmRow> = match reference_date {
        None => Vec::new(),
        Some(reference) => groups
            .into_iter()
            .filter_map(|((weekday, hour), totals)| {
                let last_date = totals.last_date?;
                Some(RfmRow {
                    weekday,
                    hour,
                    last_date,
                    recency_days: (reference - last_date).num_days(),
                    frequency: compute_frequency(totals.monetary, distinct_dates),
                    monetary: totals.monetary,
                    casual: totals.casual,
                    registered: totals.registered,
                })
            })
            .collect(),
    };

    let by_weekday = summarize_by_weekday(&rfm_rows);
    RfmData {
        reference_date,
        distinct_dates,
        rows: rfm_rows,
        by_weekday,
    }
}

/// Mean recency, frequency and monetary per weekday, Sunday first.
///
/// Weekdays without groups report zeros.
pub fn summarize_by_weekday(rows: &[RfmRow]) -> Vec<RfmWeekdaySummary> {
    Weekday::SUNDAY_FIRST
        .iter()
        .map(|&weekday| {
            let group: Vec<&RfmRow> = rows.iter().filter(|r| r.weekday == weekday).collect();
            let mean = |value: fn(&RfmRow) -> f64| {
                if group.is_empty() {
                    0.0
                } else {
                    group.iter().map(|r| value(*r)).sum::<f64>() / group.len() as f64
                }
            };

            RfmWeekdaySummary {
                weekday,
                groups: group.len(),
                mean_recency_days: mean(|r| r.recency_days as f64),
                mean_frequency: mean(|r| r.frequency),
                mean_monetary: mean(|r| r.monetary as f64),
            }
        })
        .collect()
}

pub async fn get_rfm_data<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<RfmData> {
    let rows = repo.fetch_hours(filter).await?;
    debug!("rfm over {} rows", rows.len());
    Ok(compute_rfm(&rows))
}
