//! Feedback store trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Feedback, NewFeedback};

/// Repository trait for the `feedback` table.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a feedback message.
    async fn insert_feedback(&self, feedback: &NewFeedback) -> RepositoryResult<Feedback>;

    /// List stored feedback, oldest first.
    async fn list_feedback(&self) -> RepositoryResult<Vec<Feedback>>;
}
