//! Service layer for business logic and orchestration.
//!
//! The four engine stages are pure functions:
//! [`validator`] -> [`calculator`] -> [`classifier`] -> [`history`].
//! [`pipeline`] strings them together with the record store, and
//! [`feedback`] handles the feedback form.

pub mod calculator;
pub mod classifier;
pub mod feedback;
pub mod history;
pub mod pipeline;
pub mod validator;



pub use calculator::{compute, round_half_up};
pub use classifier::{classify, SAFE_UFR_THRESHOLD};
pub use feedback::{submit_feedback, validate_feedback, FeedbackError};
pub use history::{rebuild, summarize, HistoryPoint, HistorySummary, UfrHistorySeries};
pub use pipeline::{
    CalculationOutcome, CalculationSnapshot, CalculationState, CalculatorSession, ComputedResult,
    PipelineError, StoreNotice,
};
pub use validator::{
    validate, validate_raw, validate_values, RawUfrInput, ValidationError, MAX_TREATMENT_HOURS,
};
