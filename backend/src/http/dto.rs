//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies are re-exported from the routes module since they already
//! derive Serialize/Deserialize. Request bodies live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Calculator
    CalculationData,
    // Features
    FeatureSampleData, SamplePoint,
    // Feedback
    FeedbackReceipt,
    // History
    HistoryData, RecordEntry, RecordList,
};
use crate::services::validator::RawUfrInput;

/// A calculator field as sent by the client: either the text typed into the
/// form or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl Default for InputValue {
    fn default() -> Self {
        InputValue::Text(String::new())
    }
}

impl InputValue {
    /// Text form handed to the validator. Numbers use Rust's shortest
    /// round-trip formatting, so they parse back to the same value.
    pub fn to_raw_string(&self) -> String {
        match self {
            InputValue::Number(n) => n.to_string(),
            InputValue::Text(s) => s.clone(),
        }
    }
}

/// Request body for `POST /v1/ufr/calculate`.
///
/// Missing fields are treated as empty input and rejected by the validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub fluid_removed: InputValue,
    #[serde(default)]
    pub patient_weight: InputValue,
    #[serde(default)]
    pub treatment_time: InputValue,
}

impl CalculateRequest {
    pub fn to_raw_input(&self) -> RawUfrInput {
        RawUfrInput::new(
            self.fluid_removed.to_raw_string(),
            self.patient_weight.to_raw_string(),
            self.treatment_time.to_raw_string(),
        )
    }
}

/// Request body for `POST /v1/feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
