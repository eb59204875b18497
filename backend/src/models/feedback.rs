use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FeedbackId;

/// Validated feedback ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Stored feedback message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn from_new(id: FeedbackId, feedback: NewFeedback, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: feedback.name,
            email: feedback.email,
            message: feedback.message,
            created_at,
        }
    }
}
