//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::calculator::CalculationData;
pub use crate::routes::features::FeatureSampleData;
pub use crate::routes::features::SamplePoint;
pub use crate::routes::feedback::FeedbackReceipt;
pub use crate::routes::history::HistoryData;
pub use crate::routes::history::RecordEntry;
pub use crate::routes::history::RecordList;

pub use crate::models::{FeedbackId, RecordId, RemarkKind};
pub use crate::services::history::{HistoryPoint, HistorySummary};
pub use crate::services::pipeline::StoreNotice;
