use log::debug;

use crate::api::WeekdayHourMatrix;
use crate::db::repository::{RepositoryResult, UsageRepository};
use crate::models::{HourlyRecord, UsageFilter};

/// Pivot hourly rentals into a 7×24 weekday × hour matrix.
///
/// A cell is `Some(sum)` as soon as one row falls into it, even when that
/// sum is 0. Cells without rows stay `None`.
pub fn compute_weekday_hour_matrix(rows: &[HourlyRecord]) -> WeekdayHourMatrix {
    let mut matrix = WeekdayHourMatrix::empty();
    for row in rows {
        let cell = matrix
            .rows
            .get_mut(row.weekday.monday_first_index())
            .and_then(|r| r.cells.get_mut(usize::from(row.hour)));
        if let Some(cell) = cell {
            *cell = Some(cell.unwrap_or(0).saturating_add(row.count));
        }
    }
    matrix
}

pub async fn get_heatmap<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<WeekdayHourMatrix> {
    let rows = repo.fetch_hours(filter).await?;
    let matrix = compute_weekday_hour_matrix(&rows);
    debug!("heatmap over {} rows, {} rentals", rows.len(), matrix.total());
    Ok(matrix)
}
