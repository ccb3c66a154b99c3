//! REST layer: axum handlers and routing for the dashboard API.
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use shared::{DashboardResponse, FilterOptions, FilterSelection};
use tracing::info;

use crate::domain::DashboardService;

/// Application state shared by all handlers.
///
/// The service holds the dataset behind an `Arc`, so cloning per request
/// is cheap and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }
}

/// Build the `/api` router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/filters", get(get_filter_options))
        .route("/dashboard", post(compute_dashboard))
        .with_state(state)
}

/// Axum handler for GET /api/filters
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    info!("GET /api/filters");
    Json(state.dashboard_service.filter_options())
}

/// Axum handler for POST /api/dashboard
///
/// The body is a `FilterSelection`; missing fields mean "no restriction",
/// so `{}` queries the whole dataset. A selection matching nothing is a
/// normal 200 with zero KPIs and empty series.
pub async fn compute_dashboard(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> Json<DashboardResponse> {
    info!("POST /api/dashboard - selection: {:?}", selection);
    Json(state.dashboard_service.dashboard(&selection))
}

/// Axum handler for GET /api/health
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{SalesDataset, SalesRecord};
    use axum::body::Body;
    use axum::http::{header, Request};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn record(date: &str, region: &str, category: &str, salesperson: &str, amount: f64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            region: region.to_string(),
            category: category.to_string(),
            salesperson: salesperson.to_string(),
            amount,
        }
    }

    fn test_state() -> AppState {
        let dataset = SalesDataset::new(vec![
            record("2024-01-01", "East", "A", "X", 100.0),
            record("2024-01-02", "West", "B", "Y", 50.0),
        ]);
        AppState::new(DashboardService::new(Arc::new(dataset)))
    }

    #[tokio::test]
    async fn filter_options_handler_lists_distinct_values() {
        let response = get_filter_options(State(test_state())).await;

        assert_eq!(response.0.regions, vec!["East", "West"]);
        assert_eq!(response.0.categories, vec!["A", "B"]);
        assert_eq!(response.0.salespeople, vec!["X", "Y"]);
    }

    #[tokio::test]
    async fn dashboard_handler_applies_selection() {
        let selection = FilterSelection {
            regions: vec!["East".to_string()],
            ..Default::default()
        };

        let response = compute_dashboard(State(test_state()), Json(selection)).await;

        assert_eq!(response.0.summary.total_sales, 100.0);
        assert_eq!(response.0.summary.average_sales, 100.0);
        assert_eq!(response.0.summary.record_count, 1);
        assert_eq!(response.0.trend.len(), 1);
    }

    #[tokio::test]
    async fn dashboard_handler_zero_match_is_ok_not_error() {
        let selection = FilterSelection {
            regions: vec!["North".to_string()],
            ..Default::default()
        };

        let response = compute_dashboard(State(test_state()), Json(selection)).await;

        assert_eq!(response.0.summary.total_sales, 0.0);
        assert_eq!(response.0.summary.formatted_total, "$0");
        assert!(response.0.trend.is_empty());
        assert!(response.0.by_category.is_empty());
    }

    #[tokio::test]
    async fn dashboard_route_accepts_empty_json_object() {
        let app = api_router(test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/dashboard")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: DashboardResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload.summary.total_sales, 150.0);
        assert_eq!(payload.summary.formatted_total, "$150");
        assert_eq!(payload.summary.formatted_average, "$75");
    }

    #[tokio::test]
    async fn health_route_reports_ok() {
        let app = api_router(test_state());
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
