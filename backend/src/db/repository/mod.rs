//! Repository trait for access to the loaded usage extracts.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//!
//! Every fetch takes the user's [`UsageFilter`] and returns the matching rows
//! only; aggregation happens in [`crate::services`].

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::{
    CustomerTypeRecord, DailyHourRecord, DatasetBounds, DatasetRowCounts, DayTypeHourRecord,
    HourlyRecord, UsageDatasets, UsageFilter,
};

/// Read-only access to the four extracts.
///
/// # Example
///
/// ```ignore
/// async fn weekday_rows<R: UsageRepository + ?Sized>(
///     repo: &R,
///     filter: &UsageFilter,
/// ) -> RepositoryResult<usize> {
///     Ok(repo.fetch_daily_hours(filter).await?.len())
/// }
/// ```
#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Whether the store is ready to serve queries.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Number of loaded rows per extract.
    async fn row_counts(&self) -> RepositoryResult<DatasetRowCounts>;

    /// Global date span, or `None` when nothing is loaded.
    async fn dataset_bounds(&self) -> RepositoryResult<Option<DatasetBounds>>;

    async fn fetch_daily_hours(
        &self,
        filter: &UsageFilter,
    ) -> RepositoryResult<Vec<DailyHourRecord>>;

    async fn fetch_hours(&self, filter: &UsageFilter) -> RepositoryResult<Vec<HourlyRecord>>;

    async fn fetch_day_type_hours(
        &self,
        filter: &UsageFilter,
    ) -> RepositoryResult<Vec<DayTypeHourRecord>>;

    async fn fetch_customer_types(
        &self,
        filter: &UsageFilter,
    ) -> RepositoryResult<Vec<CustomerTypeRecord>>;

    /// All four extracts under one filter.
    async fn fetch_filtered(&self, filter: &UsageFilter) -> RepositoryResult<UsageDatasets> {
        Ok(UsageDatasets::new(
            self.fetch_daily_hours(filter).await?,
            self.fetch_hours(filter).await?,
            self.fetch_day_type_hours(filter).await?,
            self.fetch_customer_types(filter).await?,
        ))
    }
}
