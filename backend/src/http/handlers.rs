//! HTTP handlers for the REST API.
//!
//! Each handler resolves the filter from the query string and delegates to
//! the service layer.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    BoundsResponse, DashboardData, DayTypeHourPoint, FilterQuery, HealthResponse, HourCount,
    MonthlyPoint, RfmData, UserTypeRentals, WeekdayHourMatrix, WeekdayRentals, YearHourPoint,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::UsageFilter;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

async fn resolve_filter(state: &AppState, query: &FilterQuery) -> Result<UsageFilter, AppError> {
    let bounds = db_services::get_dataset_bounds(state.repository.as_ref()).await?;
    Ok(query.resolve(bounds.as_ref())?)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo = state.repository.as_ref();
    let status = match db_services::health_check(repo).await {
        Ok(true) => "ok".to_string(),
        Ok(false) => "degraded".to_string(),
        Err(e) => format!("error: {}", e),
    };
    let datasets = db_services::get_row_counts(repo).await?;

    Ok(Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        datasets,
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/bounds
pub async fn get_bounds(State(state): State<AppState>) -> HandlerResult<BoundsResponse> {
    let repo = state.repository.as_ref();
    let bounds = db_services::get_dataset_bounds(repo).await?;
    let default_filter = db_services::get_default_filter(repo).await?;
    Ok(Json(BoundsResponse {
        bounds,
        default_filter,
    }))
}

/// GET /v1/dashboard
///
/// Every chart dataset recomputed for the requested filter.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<DashboardData> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_dashboard_data(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

// =============================================================================
// Rental series
// =============================================================================

/// GET /v1/rentals/by-weekday
pub async fn get_rentals_by_weekday(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<WeekdayRentals> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_rentals_by_weekday(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /v1/rentals/by-hour
pub async fn get_rentals_by_hour(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<HourCount>> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_rentals_by_hour(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /v1/rentals/by-month
pub async fn get_rentals_by_month(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<MonthlyPoint>> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_rentals_by_month(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /v1/rentals/by-year-hour
pub async fn get_rentals_by_year_hour(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<YearHourPoint>> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_rentals_by_year_hour(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /v1/rentals/heatmap
pub async fn get_heatmap(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<WeekdayHourMatrix> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_heatmap(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /v1/rentals/by-day-type
pub async fn get_rentals_by_day_type(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<DayTypeHourPoint>> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_rentals_by_day_type(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /v1/rentals/by-user-type
pub async fn get_rentals_by_user_type(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<UserTypeRentals> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_rentals_by_user_type(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

// =============================================================================
// RFM
// =============================================================================

/// GET /v1/rfm
pub async fn get_rfm(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<RfmData> {
    let filter = resolve_filter(&state, &query).await?;
    let data = services::get_rfm_data(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}
