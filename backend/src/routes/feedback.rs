use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Feedback, FeedbackId};
use crate::services::feedback::FEEDBACK_THANKS;

/// Acknowledgement returned after a feedback message is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReceipt {
    pub id: FeedbackId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Feedback> for FeedbackReceipt {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id,
            message: FEEDBACK_THANKS.to_string(),
            created_at: feedback.created_at,
        }
    }
}

pub const SUBMIT_FEEDBACK: &str = "submit_feedback";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_thanks_the_user() {
        let feedback = Feedback {
            id: FeedbackId::new(3),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Nice".to_string(),
            created_at: Utc::now(),
        };
        let receipt = FeedbackReceipt::from(&feedback);
        assert_eq!(receipt.id, FeedbackId::new(3));
        assert_eq!(receipt.message, "Thank you for your feedback!");
    }
}
