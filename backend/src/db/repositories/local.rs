//! In-memory local repository implementation.
//!
//! The extracts are loaded once and shared behind an `Arc`; nothing mutates
//! them afterwards, so clones are cheap and need no locking.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::db::repository::*;
use crate::io::{load_datasets, DataPaths};
use crate::models::{
    CustomerTypeRecord, DailyHourRecord, DatasetBounds, DatasetRowCounts, DayTypeHourRecord,
    HourlyRecord, UsageDatasets, UsageFilter,
};
use crate::transformations::apply_filter;

/// In-memory local repository.
///
/// # Example
/// ```
/// use bikeshare_rust::db::repositories::LocalRepository;
/// use bikeshare_rust::models::UsageDatasets;
///
/// let repo = LocalRepository::with_datasets(UsageDatasets::default());
/// assert!(repo.datasets().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalRepository {
    data: Arc<UsageDatasets>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-validated datasets.
    pub fn with_datasets(datasets: UsageDatasets) -> Self {
        Self {
            data: Arc::new(datasets),
        }
    }

    /// Load and validate the extracts at `paths`.
    pub fn from_paths(paths: &DataPaths) -> RepositoryResult<Self> {
        let datasets = load_datasets(paths).map_err(RepositoryError::from_load_error)?;
        Ok(Self::with_datasets(datasets))
    }

    pub fn datasets(&self) -> &UsageDatasets {
        &self.data
    }
}

#[async_trait]
impl UsageRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn row_counts(&self) -> RepositoryResult<DatasetRowCounts> {
        Ok(self.data.row_counts())
    }

    async fn dataset_bounds(&self) -> RepositoryResult<Option<DatasetBounds>> {
        Ok(self.data.bounds())
    }

    async fn fetch_daily_hours(
        &self,
        filter: &UsageFilter,
    ) -> RepositoryResult<Vec<DailyHourRecord>> {
        let rows = apply_filter(&self.data.daily_hours, filter);
        debug!("fetch_daily_hours: {} of {} rows", rows.len(), self.data.daily_hours.len());
        Ok(rows)
    }

    async fn fetch_hours(&self, filter: &UsageFilter) -> RepositoryResult<Vec<HourlyRecord>> {
        let rows = apply_filter(&self.data.hours, filter);
        debug!("fetch_hours: {} of {} rows", rows.len(), self.data.hours.len());
        Ok(rows)
    }

    async fn fetch_day_type_hours(
        &self,
        filter: &UsageFilter,
    ) -> RepositoryResult<Vec<DayTypeHourRecord>> {
        let rows = apply_filter(&self.data.day_type_hours, filter);
        debug!(
            "fetch_day_type_hours: {} of {} rows",
            rows.len(),
            self.data.day_type_hours.len()
        );
        Ok(rows)
    }

    async fn fetch_customer_types(
        &self,
        filter: &UsageFilter,
    ) -> RepositoryResult<Vec<CustomerTypeRecord>> {
        let rows = apply_filter(&self.data.customer_types, filter);
        debug!(
            "fetch_customer_types: {} of {} rows",
            rows.len(),
            self.data.customer_types.len()
        );
        Ok(rows)
    }
}
