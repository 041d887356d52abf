//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{dashboard, heatmap, rentals, rfm};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS so a separately served front-end can call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(dashboard::GET_BOUNDS, get(handlers::get_bounds))
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(rentals::GET_RENTALS_BY_WEEKDAY, get(handlers::get_rentals_by_weekday))
        .route(rentals::GET_RENTALS_BY_HOUR, get(handlers::get_rentals_by_hour))
        .route(rentals::GET_RENTALS_BY_MONTH, get(handlers::get_rentals_by_month))
        .route(rentals::GET_RENTALS_BY_YEAR_HOUR, get(handlers::get_rentals_by_year_hour))
        .route(heatmap::GET_HEATMAP, get(handlers::get_heatmap))
        .route(rentals::GET_RENTALS_BY_DAY_TYPE, get(handlers::get_rentals_by_day_type))
        .route(rentals::GET_RENTALS_BY_USER_TYPE, get(handlers::get_rentals_by_user_type))
        .route(rfm::GET_RFM, get(handlers::get_rfm));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::UsageRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn UsageRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
    }
}
