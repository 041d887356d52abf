//! End-to-end tests of the REST API over fixture extracts.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use bikeshare_rust::config::DashboardConfig;
use bikeshare_rust::db::repositories::LocalRepository;
use bikeshare_rust::http::{bind_listener, create_router, AppState};
use bikeshare_rust::io::DataPaths;

const DAYS: i64 = 28;

fn app() -> Router {
    let dir = support::extracts_dir(DAYS);
    let repo = LocalRepository::from_paths(&DataPaths::in_dir(dir.path())).unwrap();
    create_router(AppState::new(Arc::new(repo)))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn total_between(first_day: i64, last_day: i64, hours: std::ops::RangeInclusive<u32>) -> u64 {
    (first_day..=last_day)
        .flat_map(|d| hours.clone().map(move |h| support::slot_count(d, h)))
        .sum()
}

fn sum_field(values: &Value, field: &str) -> u64 {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v[field].as_u64().unwrap())
        .sum()
}

#[tokio::test]
async fn test_health_reports_row_counts() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["datasets"]["daily_hours"], DAYS * 24);
    assert_eq!(body["datasets"]["customer_types"], DAYS);
}

#[tokio::test]
async fn test_bounds_and_default_filter() {
    let (status, body) = get_json("/v1/bounds").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bounds"]["min_date"], "2011-01-01");
    assert_eq!(body["bounds"]["max_date"], "2011-01-28");
    assert_eq!(body["default_filter"]["dates"]["start"], "2011-01-01");
    assert_eq!(body["default_filter"]["hours"]["start"], 0);
    assert_eq!(body["default_filter"]["hours"]["end"], 23);
}

#[tokio::test]
async fn test_first_week_weekday_totals() {
    let (status, body) =
        get_json("/v1/rentals/by-weekday?start_date=2011-01-01&end_date=2011-01-07").await;
    assert_eq!(status, StatusCode::OK);

    let totals = &body["totals"];
    assert_eq!(totals.as_array().unwrap().len(), 7);
    assert_eq!(totals[0]["weekday"], "Monday");
    assert_eq!(totals[6]["weekday"], "Sunday");
    assert_eq!(sum_field(totals, "count"), total_between(0, 6, 0..=23));

    let ranked = body["ranked"].as_array().unwrap();
    assert!(ranked
        .windows(2)
        .all(|w| w[0]["count"].as_u64() >= w[1]["count"].as_u64()));
}

#[tokio::test]
async fn test_single_hour_filter() {
    let (status, body) = get_json("/v1/rentals/by-hour?start_hour=8&end_hour=8").await;
    assert_eq!(status, StatusCode::OK);

    let hours = body.as_array().unwrap();
    assert_eq!(hours.len(), 24);
    for entry in hours {
        let count = entry["count"].as_u64().unwrap();
        if entry["hour"] == 8 {
            assert_eq!(count, total_between(0, DAYS - 1, 8..=8));
        } else {
            assert_eq!(count, 0);
        }
    }
}

#[tokio::test]
async fn test_out_of_range_hours_pass_through() {
    let (_, wide) = get_json("/v1/rentals/by-hour?start_hour=-5&end_hour=40").await;
    let (_, default) = get_json("/v1/rentals/by-hour").await;
    assert_eq!(wide, default);
}

#[tokio::test]
async fn test_malformed_date_is_bad_request() {
    let (status, body) = get_json("/v1/dashboard?start_date=01/02/2011").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("01/02/2011"));
    assert!(body["details"].as_str().unwrap().contains("start_date"));
}

#[tokio::test]
async fn test_malformed_hour_is_bad_request() {
    let (status, body) = get_json("/v1/rfm?end_hour=noon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("end_hour"));
}

#[tokio::test]
async fn test_inverted_range_yields_empty_dashboard() {
    let (status, body) =
        get_json("/v1/dashboard?start_date=2011-01-20&end_date=2011-01-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insufficient_data"], true);
    assert_eq!(body["row_counts"]["hours"], 0);
    assert_eq!(body["by_weekday"]["totals"].as_array().unwrap().len(), 7);
    assert_eq!(sum_field(&body["by_hour"], "count"), 0);
    assert!(body["by_month"].as_array().unwrap().is_empty());
    assert!(body["rfm"]["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_conservation() {
    let (status, body) = get_json("/v1/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insufficient_data"], false);

    let total = total_between(0, DAYS - 1, 0..=23);
    assert_eq!(sum_field(&body["by_weekday"]["totals"], "count"), total);
    assert_eq!(sum_field(&body["by_hour"], "count"), total);
    assert_eq!(sum_field(&body["by_month"], "count"), total);
    assert_eq!(sum_field(&body["by_year_hour"], "count"), total);
    assert_eq!(sum_field(&body["by_day_type"], "count"), total);
    assert_eq!(sum_field(&body["rfm"]["rows"], "monetary"), total);
}

#[tokio::test]
async fn test_heatmap_shape_and_nulls() {
    let (status, body) = get_json("/v1/rentals/heatmap?start_hour=8&end_hour=8").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["weekday"], "Monday");
    for row in rows {
        let cells = row["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 24);
        assert!(cells[8].is_u64());
        assert!(cells[7].is_null());
    }
}

#[tokio::test]
async fn test_monthly_series() {
    let (status, body) = get_json("/v1/rentals/by-month").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["year"], 2011);
    assert_eq!(points[0]["label"], "Jan");
}

#[tokio::test]
async fn test_year_hour_series() {
    let (status, body) = get_json("/v1/rentals/by-year-hour").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 24);
    assert!(points.iter().all(|p| p["year"] == 2011));
}

#[tokio::test]
async fn test_day_type_series_order() {
    let (status, body) = get_json("/v1/rentals/by-day-type").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 48);
    assert_eq!(points[0]["hour"], 0);
    assert_eq!(points[0]["day_type"], "Weekday");
    assert_eq!(points[1]["day_type"], "Weekend");
}

#[tokio::test]
async fn test_user_type_views() {
    let (status, body) = get_json("/v1/rentals/by-user-type").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wide"].as_array().unwrap().len(), 7);
    let long = body["long"].as_array().unwrap();
    assert_eq!(long.len(), 14);
    assert_eq!(long[0]["user_type"], "casual");

    let total = total_between(0, DAYS - 1, 0..=23);
    assert_eq!(sum_field(&body["long"], "count"), total);
}

#[tokio::test]
async fn test_rfm_summary_is_sunday_first() {
    let (status, body) = get_json("/v1/rfm").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distinct_dates"], DAYS);
    assert_eq!(body["reference_date"], "2011-01-28");

    let summary = body["by_weekday"].as_array().unwrap();
    assert_eq!(summary.len(), 7);
    assert_eq!(summary[0]["weekday"], "Sunday");
    assert_eq!(summary[6]["weekday"], "Saturday");

    assert_eq!(body["rows"].as_array().unwrap().len(), 7 * 24);
    assert_eq!(body["rows"][0]["weekday"], "Sunday");
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app()
        .oneshot(Request::builder().uri("/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bind_listener_resolves_hostname() {
    let config = DashboardConfig::default()
        .with_overrides(|key| match key {
            "HOST" => Some("localhost".to_string()),
            "PORT" => Some("0".to_string()),
            _ => None,
        })
        .unwrap();

    let listener = bind_listener(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();
    assert!(addr.ip().is_loopback());
    assert_ne!(addr.port(), 0);
}
