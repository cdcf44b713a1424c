//! HTTP routes.
//!
//! ```text
//! POST /receipts/process        RawReceipt JSON → {"id": "..."}
//! GET  /receipts/:id/points     → {"points": n}
//! GET  /health                  → {"status": "ok", "receipts": n}
//! ```

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use receipts_core::validation::validate_receipt;
use receipts_core::{RawReceipt, ValidationOptions};
use receipts_store::ReceiptService;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<ReceiptService>,
    pub validation: ValidationOptions,
}

impl AppState {
    pub fn new(service: ReceiptService, validation: ValidationOptions) -> Self {
        AppState {
            service: Arc::new(service),
            validation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /receipts/process
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<RawReceipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(raw) = payload?;
    let receipt = validate_receipt(raw, &state.validation)?;
    let id = state.service.process(&receipt)?;

    Ok(Json(ProcessResponse { id: id.to_string() }))
}

/// GET /receipts/:id/points
async fn get_points(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PointsResponse>, ApiError> {
    let Path(id) = id?;
    let points = state.service.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let receipts = state.service.store().len()?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        receipts,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use receipts_core::RuleSet;
    use receipts_store::ReceiptStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::error::{ErrorBody, INVALID_RECEIPT_DETAIL, NOT_FOUND_DETAIL};

    fn app_with(rules: RuleSet, validation: ValidationOptions) -> Router {
        let service = ReceiptService::new(Arc::new(ReceiptStore::new())).with_rules(rules);
        router(AppState::new(service, validation))
    }

    fn app() -> Router {
        app_with(RuleSet::default(), ValidationOptions::default())
    }

    fn target_json() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
                { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
                { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
                { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
            ],
            "total": "35.35"
        })
    }

    fn corner_market_json() -> Value {
        let gatorade = json!({ "shortDescription": "Gatorade", "price": "2.25" });
        json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [gatorade.clone(), gatorade.clone(), gatorade.clone(), gatorade],
            "total": "9.00"
        })
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Processes a receipt and returns the points the API reports for it.
    async fn score(app: &Router, receipt: &Value) -> u64 {
        let response = app
            .clone()
            .oneshot(post_json(receipt.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let ProcessResponse { id } = body_json(response).await;

        let response = app
            .clone()
            .oneshot(get(&format!("/receipts/{id}/points")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let PointsResponse { points } = body_json(response).await;
        points
    }

    async fn assert_invalid(app: &Router, body: String) {
        let response = app.clone().oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = body_json(response).await;
        assert_eq!(error.detail, INVALID_RECEIPT_DETAIL);
    }

    #[tokio::test]
    async fn test_process_returns_uuid_id() {
        let response = app()
            .oneshot(post_json(corner_market_json().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ProcessResponse { id } = body_json(response).await;
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[tokio::test]
    async fn test_corner_market_scores_109() {
        assert_eq!(score(&app(), &corner_market_json()).await, 109);
    }

    #[tokio::test]
    async fn test_target_scores_by_rule_set() {
        assert_eq!(score(&app(), &target_json()).await, 33);

        let published = app_with(RuleSet::without_total_threshold(), ValidationOptions::default());
        assert_eq!(score(&published, &target_json()).await, 28);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let app = app();
        let unknown = format!("/receipts/{}/points", uuid::Uuid::new_v4());

        for uri in [unknown.as_str(), "/receipts/not-a-uuid/points"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let error: ErrorBody = body_json(response).await;
            assert_eq!(error.detail, NOT_FOUND_DETAIL);
        }
    }

    #[tokio::test]
    async fn test_undecodable_id_is_not_found() {
        let response = app().oneshot(get("/receipts/%FF/points")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorBody = body_json(response).await;
        assert_eq!(error.detail, NOT_FOUND_DETAIL);
    }

    #[tokio::test]
    async fn test_invalid_receipts_are_rejected() {
        let app = app();

        assert_invalid(&app, "{not json".to_string()).await;

        let mut missing_total = target_json();
        missing_total.as_object_mut().unwrap().remove("total");
        assert_invalid(&app, missing_total.to_string()).await;

        let mut no_items = target_json();
        no_items["items"] = json!([]);
        assert_invalid(&app, no_items.to_string()).await;

        let mut bad_price = target_json();
        bad_price["items"][0]["price"] = json!("6.4");
        assert_invalid(&app, bad_price.to_string()).await;

        let mut bad_retailer = target_json();
        bad_retailer["retailer"] = json!("Target!");
        assert_invalid(&app, bad_retailer.to_string()).await;

        let mut bad_time = target_json();
        bad_time["purchaseTime"] = json!("1:01pm");
        assert_invalid(&app, bad_time.to_string()).await;

        let mut numeric_total = target_json();
        numeric_total["total"] = json!(35.35);
        assert_invalid(&app, numeric_total.to_string()).await;
    }

    #[tokio::test]
    async fn test_missing_content_type_is_invalid() {
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from(target_json().to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_matching_total_enforced_when_configured() {
        let strict = app_with(
            RuleSet::default(),
            ValidationOptions {
                require_matching_total: true,
            },
        );

        assert_eq!(score(&strict, &target_json()).await, 33);

        let mut mismatched = target_json();
        mismatched["total"] = json!("35.36");
        assert_invalid(&strict, mismatched.to_string()).await;
    }

    #[tokio::test]
    async fn test_health_reports_receipt_count() {
        let app = app();
        score(&app, &corner_market_json()).await;

        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.receipts, 1);
    }
}
