//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, http::StatusCode, Json};
use log::{debug, warn};

use super::dto::{
    CalculateRequest, CalculationData, FeatureSampleData, FeedbackReceipt, FeedbackRequest,
    HealthResponse, HistoryData, RecordList,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::routes::features::sample_data;
use crate::services::feedback::submit_feedback as submit_feedback_service;
use crate::services::history::rebuild;
use crate::services::pipeline::CalculationOutcome;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Calculator
// =============================================================================

/// POST /v1/ufr/calculate
///
/// Validate, compute, classify and store one calculation. A rejected input
/// answers 422; a store failure still answers 200 with a notice.
pub async fn calculate_ufr(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> HandlerResult<CalculationData> {
    let session = state.calculator_session();
    if let Err(e) = session.load_history().await {
        warn!("Could not load history before calculating: {}", e);
    }

    match session.calculate(&request.to_raw_input()).await? {
        CalculationOutcome::Rejected(err) => Err(AppError::Validation(err)),
        CalculationOutcome::Computed(result) => Ok(Json(CalculationData::from(&result))),
    }
}

// =============================================================================
// History
// =============================================================================

/// GET /v1/ufr/history
pub async fn get_history(State(state): State<AppState>) -> HandlerResult<HistoryData> {
    let records = db_services::list_records(state.repository.as_ref()).await?;
    let series = rebuild(&records);
    debug!("Serving history with {} points", series.len());
    Ok(Json(HistoryData::from(&series)))
}

/// GET /v1/ufr/records
pub async fn list_records(State(state): State<AppState>) -> HandlerResult<RecordList> {
    let records = db_services::list_records(state.repository.as_ref()).await?;
    Ok(Json(RecordList::from(records)))
}

// =============================================================================
// Feedback
// =============================================================================

/// POST /v1/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackReceipt>), AppError> {
    let stored = submit_feedback_service(
        state.repository.as_ref(),
        &request.name,
        &request.email,
        &request.message,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(FeedbackReceipt::from(&stored))))
}

// =============================================================================
// Feature charts
// =============================================================================

/// GET /v1/features/sample
pub async fn get_feature_sample() -> HandlerResult<FeatureSampleData> {
    Ok(Json(sample_data()))
}
