use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{UsageFilter, UsageRecord};

/// Rows whose date and hour both fall inside the inclusive bounds of
/// `filter`, in source order.
///
/// Rows without an hour bucket are selected on date alone. No match yields
/// an empty vector.
pub fn apply_filter<R>(records: &[R], filter: &UsageFilter) -> Vec<R>
where
    R: UsageRecord + Clone,
{
    records
        .iter()
        .filter(|r| filter.matches(*r))
        .cloned()
        .collect()
}

/// Number of distinct calendar dates present in `records`.
pub fn count_distinct_dates<R: UsageRecord>(records: &[R]) -> usize {
    records
        .iter()
        .map(UsageRecord::date)
        .collect::<BTreeSet<NaiveDate>>()
        .len()
}
