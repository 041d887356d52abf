use log::debug;

use crate::api::DashboardData;
use crate::db::repository::{RepositoryResult, UsageRepository};
use crate::models::{DatasetBounds, UsageDatasets, UsageFilter};

use super::heatmap::compute_weekday_hour_matrix;
use super::rentals::{
    compute_by_day_type, compute_by_hour, compute_by_user_type, compute_by_weekday,
    compute_hourly_by_year, compute_monthly_by_year,
};
use super::rfm::compute_rfm;

/// Every chart dataset from already-filtered extracts.
pub(crate) fn assemble_dashboard(
    subset: &UsageDatasets,
    filter: UsageFilter,
    bounds: Option<DatasetBounds>,
) -> DashboardData {
    DashboardData {
        filter,
        bounds,
        row_counts: subset.row_counts(),
        insufficient_data: subset.hours.is_empty(),
        by_weekday: compute_by_weekday(&subset.daily_hours),
        by_hour: compute_by_hour(&subset.daily_hours),
        by_month: compute_monthly_by_year(&subset.hours),
        by_year_hour: compute_hourly_by_year(&subset.hours),
        heatmap: compute_weekday_hour_matrix(&subset.hours),
        by_day_type: compute_by_day_type(&subset.day_type_hours),
        by_user_type: compute_by_user_type(&subset.customer_types),
        rfm: compute_rfm(&subset.hours),
    }
}

/// Filter `datasets` and recompute every chart dataset.
pub fn compute_dashboard(datasets: &UsageDatasets, filter: &UsageFilter) -> DashboardData {
    let subset = datasets.filtered(filter);
    assemble_dashboard(&subset, *filter, datasets.bounds())
}

pub async fn get_dashboard_data<R: UsageRepository + ?Sized>(
    repo: &R,
    filter: &UsageFilter,
) -> RepositoryResult<DashboardData> {
    let bounds = repo.dataset_bounds().await?;
    let subset = repo.fetch_filtered(filter).await?;
    debug!("dashboard over {:?}", subset.row_counts());
    Ok(assemble_dashboard(&subset, *filter, bounds))
}
