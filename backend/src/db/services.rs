//! Repository-agnostic helpers used by the HTTP layer and the binary.

use super::repository::{RepositoryResult, UsageRepository};
use crate::models::{DatasetBounds, DatasetRowCounts, UsageFilter};

/// Check that the repository can serve queries.
pub async fn health_check<R: UsageRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

pub async fn get_row_counts<R: UsageRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<DatasetRowCounts> {
    repo.row_counts().await
}

pub async fn get_dataset_bounds<R: UsageRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Option<DatasetBounds>> {
    repo.dataset_bounds().await
}

/// The selection a fresh dashboard starts with: full date span, all hours.
pub async fn get_default_filter<R: UsageRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<UsageFilter> {
    let bounds = repo.dataset_bounds().await?;
    Ok(bounds
        .as_ref()
        .map(UsageFilter::full)
        .unwrap_or_else(UsageFilter::unbounded))
}
