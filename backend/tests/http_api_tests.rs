//! HTTP API tests driving the router directly with `tower::ServiceExt::oneshot`.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ufr_insight::db::{FullRepository, LocalRepository};
use ufr_insight::http::{create_router, AppState};

fn app_with(repo: &LocalRepository) -> Router {
    let repository: Arc<dyn FullRepository> = Arc::new(repo.clone());
    create_router(AppState::new(repository))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_database() {
    let repo = LocalRepository::new();
    let (status, body) = send(app_with(&repo), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");

    repo.set_healthy(false);
    let (_, body) = send(app_with(&repo), get("/health")).await;
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_calculate_safe_result() {
    let repo = LocalRepository::new();
    let (status, body) = send(
        app_with(&repo),
        post_json(
            "/v1/ufr/calculate",
            json!({"fluid_removed": "2500", "patient_weight": "70", "treatment_time": "4"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ufr"], 8.93);
    assert_eq!(body["remark"], "UFR is below 13 ml/kg/hr, considered safe");
    assert_eq!(body["remark_kind"], "safe");
    assert_eq!(body["persisted"], true);
    assert!(body["notice"].is_null());
    assert_eq!(body["history"]["values"], json!([8.93]));
    assert_eq!(body["history"]["threshold"], json!([13.0]));
    assert_eq!(repo.record_count(), 1);
}

#[tokio::test]
async fn test_calculate_accepts_numbers() {
    let repo = LocalRepository::new();
    let (status, body) = send(
        app_with(&repo),
        post_json(
            "/v1/ufr/calculate",
            json!({"fluid_removed": 5000, "patient_weight": 60, "treatment_time": 3}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ufr"], 27.78);
    assert_eq!(body["remark_kind"], "at_risk");
}

#[tokio::test]
async fn test_calculate_rejects_long_duration() {
    let repo = LocalRepository::new();
    let (status, body) = send(
        app_with(&repo),
        post_json(
            "/v1/ufr/calculate",
            json!({"fluid_removed": "2000", "patient_weight": "70", "treatment_time": "25"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "DURATION_OUT_OF_RANGE");
    assert_eq!(body["message"], "Treatment duration must not exceed 24 hours.");
    assert_eq!(body["details"], "treatment_time");
    assert_eq!(repo.record_count(), 0);
}

#[tokio::test]
async fn test_calculate_rejects_missing_field() {
    let repo = LocalRepository::new();
    let (status, body) = send(
        app_with(&repo),
        post_json("/v1/ufr/calculate", json!({"fluid_removed": "2000"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "NOT_A_NUMBER");
    assert_eq!(body["details"], "patient_weight");
}

#[tokio::test]
async fn test_calculate_with_store_down_returns_notice() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    let (status, body) = send(
        app_with(&repo),
        post_json(
            "/v1/ufr/calculate",
            json!({"fluid_removed": "5000", "patient_weight": "60", "treatment_time": "3"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ufr"], 27.78);
    assert_eq!(body["persisted"], false);
    assert_eq!(body["notice_kind"], "persist_failed");
    assert!(body["notice"].as_str().unwrap().contains("could not be saved"));
}

#[tokio::test]
async fn test_history_and_records_are_ascending() {
    let repo = LocalRepository::new();
    for (ml, kg, h) in [("2500", "70", "4"), ("5000", "60", "3")] {
        let (status, _) = send(
            app_with(&repo),
            post_json(
                "/v1/ufr/calculate",
                json!({"fluid_removed": ml, "patient_weight": kg, "treatment_time": h}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(app_with(&repo), get("/v1/ufr/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["values"], json!([8.93, 27.78]));
    assert_eq!(body["summary"]["count"], 2);
    assert_eq!(body["summary"]["at_risk_count"], 1);

    let (status, body) = send(app_with(&repo), get("/v1/ufr/records")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["records"][0]["fluid_removed"], "2500");
    assert_eq!(body["records"][1]["remark_kind"], "at_risk");
}

#[tokio::test]
async fn test_history_store_failure_is_503() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    let (status, body) = send(app_with(&repo), get("/v1/ufr/history")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "REPOSITORY_UNAVAILABLE");
}

#[tokio::test]
async fn test_feedback_created() {
    let repo = LocalRepository::new();
    let (status, body) = send(
        app_with(&repo),
        post_json(
            "/v1/feedback",
            json!({"name": "Ada", "email": "ada@example.com", "message": "Helpful"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Thank you for your feedback!");
    assert_eq!(body["id"], 1);
    assert_eq!(repo.feedback_count(), 1);
}

#[tokio::test]
async fn test_feedback_invalid_is_400() {
    let repo = LocalRepository::new();
    let (status, body) = send(
        app_with(&repo),
        post_json("/v1/feedback", json!({"name": "Ada", "email": "nope", "message": "Hi"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(repo.feedback_count(), 0);
}

#[tokio::test]
async fn test_feedback_store_failure_is_500() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    let (status, body) = send(
        app_with(&repo),
        post_json(
            "/v1/feedback",
            json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_ERROR");
    assert_eq!(body["message"], "Failed to submit feedback. Please try again.");
}

#[tokio::test]
async fn test_feature_sample() {
    let repo = LocalRepository::new();
    let (status, body) = send(app_with(&repo), get("/v1/features/sample")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"].as_array().unwrap().len(), 8);
    assert_eq!(body["points"][0]["country"], "USA");
    assert_eq!(body["points"][0]["remark_kind"], "safe");
    assert_eq!(body["threshold"], 13.0);
}
