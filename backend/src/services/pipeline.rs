//! Calculation pipeline.
//!
//! Drives one calculation through validation, computation, classification,
//! persistence and the history refresh as an explicit state machine:
//!
//! ```text
//! Idle -> Validating -> Rejected
//!                    -> Validated -> Computing -> Classified -> Persisting -> PersistFailed
//!                                                                          -> Persisted -> Refreshing -> Idle
//! ```
//!
//! `Rejected` and `PersistFailed` end the request; the session stays in that
//! state until the next calculation starts. Each transition produces a new
//! [`CalculationSnapshot`] that is published to every subscriber, so a
//! renderer is just another receiver on the channel.

use chrono::Utc;
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::db::repository::{RepositoryResult, UfrRecordRepository};
use crate::db::services as db_services;
use crate::models::{NewUfrRecord, RemarkKind, UfrRecord};
use crate::services::calculator::compute;
use crate::services::classifier::classify;
use crate::services::history::{rebuild, UfrHistorySeries};
use crate::services::validator::{validate_raw, RawUfrInput, ValidationError};

/// Capacity of the snapshot channel. Slow subscribers see `Lagged` past this.
pub const SNAPSHOT_CHANNEL_CAPACITY: usize = 64;

/// Where a calculation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationState {
    Idle,
    Validating,
    Rejected,
    Validated,
    Computing,
    Classified,
    Persisting,
    PersistFailed,
    Persisted,
    Refreshing,
}

impl CalculationState {
    /// States a request can end in.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CalculationState::Idle | CalculationState::Rejected | CalculationState::PersistFailed
        )
    }
}

/// Non-blocking message attached to a result when a store call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreNotice {
    /// The insert failed; the result was not saved.
    PersistFailed,
    /// The insert succeeded but the history could not be reloaded.
    RefreshFailed,
}

impl StoreNotice {
    pub fn message(&self) -> &'static str {
        match self {
            StoreNotice::PersistFailed => {
                "Your result was calculated but could not be saved. The history chart was not updated."
            }
            StoreNotice::RefreshFailed => {
                "Your result was saved but the history chart could not be refreshed."
            }
        }
    }
}

/// Immutable view of the session after one transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSnapshot {
    pub state: CalculationState,
    pub ufr: Option<f64>,
    pub remark: Option<RemarkKind>,
    /// User-facing validation message when the input was rejected.
    pub error: Option<String>,
    pub notice: Option<StoreNotice>,
    pub history: UfrHistorySeries,
}

impl CalculationSnapshot {
    pub fn idle(history: UfrHistorySeries) -> Self {
        Self {
            state: CalculationState::Idle,
            ufr: None,
            remark: None,
            error: None,
            notice: None,
            history,
        }
    }

    fn with_state(&self, state: CalculationState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}

/// Result of a calculation that got past validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedResult {
    pub ufr: f64,
    pub remark: RemarkKind,
    /// The stored record, if the insert succeeded.
    pub record: Option<UfrRecord>,
    pub notice: Option<StoreNotice>,
    pub history: UfrHistorySeries,
}

impl ComputedResult {
    pub fn persisted(&self) -> bool {
        self.record.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    Rejected(ValidationError),
    Computed(ComputedResult),
}

impl CalculationOutcome {
    pub fn computed(&self) -> Option<&ComputedResult> {
        match self {
            CalculationOutcome::Computed(result) => Some(result),
            CalculationOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&ValidationError> {
        match self {
            CalculationOutcome::Rejected(err) => Some(err),
            CalculationOutcome::Computed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("A calculation is already in progress")]
    CalculationInProgress,
}

/// Clears the in-flight flag when the calculation ends, even on early return.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, PipelineError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PipelineError::CalculationInProgress)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One user's calculator: runs calculations one at a time against a record
/// store and keeps the last good history.
pub struct CalculatorSession<R: UfrRecordRepository + ?Sized> {
    repository: Arc<R>,
    in_flight: AtomicBool,
    current: RwLock<CalculationSnapshot>,
    events: broadcast::Sender<CalculationSnapshot>,
}

impl<R: UfrRecordRepository + ?Sized> CalculatorSession<R> {
    pub fn new(repository: Arc<R>) -> Self {
        let (events, _) = broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY);
        Self {
            repository,
            in_flight: AtomicBool::new(false),
            current: RwLock::new(CalculationSnapshot::idle(UfrHistorySeries::empty())),
            events,
        }
    }

    /// Receive every snapshot published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CalculationSnapshot> {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> CalculationSnapshot {
        self.current.read().clone()
    }

    /// Last successfully loaded history.
    pub fn history(&self) -> UfrHistorySeries {
        self.current.read().history.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetch the full history from the store.
    ///
    /// On failure the previous history is kept and the error is returned.
    pub async fn load_history(&self) -> RepositoryResult<UfrHistorySeries> {
        let records = db_services::list_records(self.repository.as_ref()).await?;
        let history = rebuild(&records);
        {
            let mut current = self.current.write();
            current.history = history.clone();
        }
        debug!("History loaded with {} points", history.len());
        Ok(history)
    }

    /// Run one calculation.
    ///
    /// Fails only when another calculation on this session is still running.
    /// Rejections and store failures are reported through the outcome.
    pub async fn calculate(&self, raw: &RawUfrInput) -> Result<CalculationOutcome, PipelineError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let start = CalculationSnapshot::idle(self.history());
        let mut snapshot = start.with_state(CalculationState::Validating);
        self.publish(&snapshot);

        let input = match validate_raw(raw) {
            Ok(input) => input,
            Err(err) => {
                debug!("Calculation rejected: {} ({})", err, err.code());
                snapshot.state = CalculationState::Rejected;
                snapshot.error = Some(err.to_string());
                self.publish(&snapshot);
                return Ok(CalculationOutcome::Rejected(err));
            }
        };
        snapshot = self.transition(&snapshot, CalculationState::Validated);

        snapshot = self.transition(&snapshot, CalculationState::Computing);
        let ufr = compute(&input);

        let remark = classify(ufr);
        snapshot.ufr = Some(ufr);
        snapshot.remark = Some(remark);
        snapshot = self.transition(&snapshot, CalculationState::Classified);

        snapshot = self.transition(&snapshot, CalculationState::Persisting);
        let new_record = NewUfrRecord::from_calculation(&input, ufr, remark, Utc::now());

        let record = match db_services::store_record(self.repository.as_ref(), &new_record).await {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to persist UFR {}: {}", ufr, e);
                snapshot.notice = Some(StoreNotice::PersistFailed);
                snapshot = self.transition(&snapshot, CalculationState::PersistFailed);
                return Ok(CalculationOutcome::Computed(ComputedResult {
                    ufr,
                    remark,
                    record: None,
                    notice: snapshot.notice,
                    history: snapshot.history,
                }));
            }
        };
        snapshot = self.transition(&snapshot, CalculationState::Persisted);
        info!(
            "Calculated UFR {} ({}) stored as record {}",
            ufr,
            if remark.is_safe() { "safe" } else { "at risk" },
            record.id
        );

        snapshot = self.transition(&snapshot, CalculationState::Refreshing);
        match db_services::list_records(self.repository.as_ref()).await {
            Ok(records) => snapshot.history = rebuild(&records),
            Err(e) => {
                warn!("Record {} stored but history refresh failed: {}", record.id, e);
                snapshot.notice = Some(StoreNotice::RefreshFailed);
            }
        }
        snapshot = self.transition(&snapshot, CalculationState::Idle);

        Ok(CalculationOutcome::Computed(ComputedResult {
            ufr,
            remark,
            record: Some(record),
            notice: snapshot.notice,
            history: snapshot.history,
        }))
    }

    fn transition(
        &self,
        from: &CalculationSnapshot,
        state: CalculationState,
    ) -> CalculationSnapshot {
        let next = from.with_state(state);
        self.publish(&next);
        next
    }

    fn publish(&self, snapshot: &CalculationSnapshot) {
        *self.current.write() = snapshot.clone();
        // No receivers is fine: nobody is rendering.
        let _ = self.events.send(snapshot.clone());
    }
}
