//! Service layer for chart aggregation and orchestration.
//!
//! Each module pairs pure `compute_*` reductions over already-filtered rows
//! with async `get_*` functions that fetch the filtered rows from a
//! repository first.

pub mod dashboard;
pub mod heatmap;
pub mod rentals;
pub mod rfm;

#[cfg(test)]
mod dashboard_tests;

pub use dashboard::{compute_dashboard, get_dashboard_data};
pub use heatmap::{compute_weekday_hour_matrix, get_heatmap};
pub use rentals::{
    compute_by_day_type, compute_by_hour, compute_by_user_type, compute_by_weekday,
    compute_hourly_by_year, compute_monthly_by_year, get_rentals_by_day_type,
    get_rentals_by_hour, get_rentals_by_month, get_rentals_by_user_type,
    get_rentals_by_weekday, get_rentals_by_year_hour, melt_user_types, rank_by_count,
};
pub use rfm::{compute_frequency, compute_rfm, get_rfm_data, summarize_by_weekday};
