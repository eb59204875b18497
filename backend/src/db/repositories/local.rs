//! In-memory local repository implementation.
//!
//! This module provides a local implementation of both store traits suitable
//! for unit testing and local development. All data lives in memory behind a
//! single lock, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{Feedback, FeedbackId, NewFeedback, NewUfrRecord, RecordId, UfrRecord};

/// In-memory local repository.
///
/// Cloning shares the underlying data, so one instance can be handed to the
/// HTTP state and still be inspected from a test.
///
/// # Example
/// ```
/// use ufr_insight::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.record_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    records: Vec<UfrRecord>,
    feedback: Vec<Feedback>,

    // ID counters
    next_record_id: i64,
    next_feedback_id: i64,

    // Connection health
    is_healthy: bool,
    // Reads fail while writes still succeed
    fail_queries: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            feedback: Vec::new(),
            next_record_id: 1,
            next_feedback_id: 1,
            is_healthy: true,
            fail_queries: false,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Store a record without going through the health check.
    ///
    /// Helper for seeding data; the record is assigned the next ID.
    pub fn store_record_impl(&self, record: NewUfrRecord) -> UfrRecord {
        let mut data = self.data.write();
        let id = RecordId::new(data.next_record_id);
        data.next_record_id += 1;

        let stored = UfrRecord::from_new(id, record);
        data.records.push(stored.clone());
        stored
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy every store call fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Make reads fail while writes keep working.
    pub fn set_query_failure(&self, fail: bool) {
        self.data.write().fail_queries = fail;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            fail_queries: data.fail_queries,
            ..Default::default()
        };
    }

    pub fn record_count(&self) -> usize {
        self.data.read().records.len()
    }

    pub fn feedback_count(&self) -> usize {
        self.data.read().feedback.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str, entity: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Database is not healthy",
                ErrorContext::new(operation).with_entity(entity),
            ));
        }
        Ok(())
    }

    fn check_readable(&self, operation: &str, entity: &str) -> RepositoryResult<()> {
        self.check_health(operation, entity)?;
        if self.data.read().fail_queries {
            return Err(RepositoryError::query_with_context(
                "Query failed",
                ErrorContext::new(operation).with_entity(entity),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UfrRecordRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert_record(&self, record: &NewUfrRecord) -> RepositoryResult<UfrRecord> {
        self.check_health("insert_record", "ufr_data")?;
        Ok(self.store_record_impl(record.clone()))
    }

    async fn query_all_records(&self) -> RepositoryResult<Vec<UfrRecord>> {
        self.check_readable("query_all_records", "ufr_data")?;

        let mut records = self.data.read().records.clone();
        // Stable sort keeps insertion order for equal timestamps
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }
}

#[async_trait]
impl FeedbackRepository for LocalRepository {
    async fn insert_feedback(&self, feedback: &NewFeedback) -> RepositoryResult<Feedback> {
        self.check_health("insert_feedback", "feedback")?;

        let mut data = self.data.write();
        let id = FeedbackId::new(data.next_feedback_id);
        data.next_feedback_id += 1;

        let stored = Feedback::from_new(id, feedback.clone(), Utc::now());
        data.feedback.push(stored.clone());
        Ok(stored)
    }

    async fn list_feedback(&self) -> RepositoryResult<Vec<Feedback>> {
        self.check_readable("list_feedback", "feedback")?;
        Ok(self.data.read().feedback.clone())
    }
}
