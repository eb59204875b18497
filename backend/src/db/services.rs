//! Store-facing service functions.
//!
//! Thin wrappers over the repository traits that add logging and fill in
//! the error context. Handlers and the calculation pipeline call these
//! instead of the traits directly.

use log::{debug, warn};

use super::repository::{FeedbackRepository, RepositoryResult, UfrRecordRepository};
use crate::models::{Feedback, NewFeedback, NewUfrRecord, UfrRecord};

/// Check that the record store is reachable.
pub async fn health_check<R: UfrRecordRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Insert one calculation result.
pub async fn store_record<R: UfrRecordRepository + ?Sized>(
    repo: &R,
    record: &NewUfrRecord,
) -> RepositoryResult<UfrRecord> {
    match repo.insert_record(record).await {
        Ok(stored) => {
            debug!("Stored UFR record {} (ufr={})", stored.id, stored.ufr);
            Ok(stored)
        }
        Err(e) => {
            warn!("Failed to store UFR record: {}", e);
            Err(e.with_operation("store_record"))
        }
    }
}

/// Fetch every record, ascending by `created_at`.
pub async fn list_records<R: UfrRecordRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<UfrRecord>> {
    let records = repo
        .query_all_records()
        .await
        .map_err(|e| e.with_operation("list_records"))?;
    debug!("Loaded {} UFR records", records.len());
    Ok(records)
}

pub async fn store_feedback<R: FeedbackRepository + ?Sized>(
    repo: &R,
    feedback: &NewFeedback,
) -> RepositoryResult<Feedback> {
    repo.insert_feedback(feedback)
        .await
        .map_err(|e| e.with_operation("store_feedback"))
}

pub async fn list_feedback<R: FeedbackRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Feedback>> {
    repo.list_feedback()
        .await
        .map_err(|e| e.with_operation("list_feedback"))
}
