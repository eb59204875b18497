//! Feedback form handling.

use log::{error, info};

use crate::db::repository::{FeedbackRepository, RepositoryError};
use crate::db::services as db_services;
use crate::models::{Feedback, NewFeedback};

pub const FEEDBACK_THANKS: &str = "Thank you for your feedback!";
pub const FEEDBACK_FAILED: &str = "Failed to submit feedback. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("{0}")]
    Invalid(String),

    #[error("Failed to submit feedback. Please try again.")]
    Store(#[source] RepositoryError),
}

/// Trim the three fields and check them.
///
/// All fields are required. The email must have a local part and a domain
/// containing a dot.
pub fn validate_feedback(
    name: &str,
    email: &str,
    message: &str,
) -> Result<NewFeedback, FeedbackError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    for (value, label) in [(name, "Name"), (email, "Email"), (message, "Message")] {
        if value.is_empty() {
            return Err(FeedbackError::Invalid(format!("{} is required.", label)));
        }
    }

    if !looks_like_email(email) {
        return Err(FeedbackError::Invalid(
            "Please enter a valid email address.".to_string(),
        ));
    }

    Ok(NewFeedback {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Validate and store a feedback submission.
pub async fn submit_feedback<R: FeedbackRepository + ?Sized>(
    repo: &R,
    name: &str,
    email: &str,
    message: &str,
) -> Result<Feedback, FeedbackError> {
    let feedback = validate_feedback(name, email, message)?;

    match db_services::store_feedback(repo, &feedback).await {
        Ok(stored) => {
            info!("Stored feedback {}", stored.id);
            Ok(stored)
        }
        Err(e) => {
            error!("Failed to store feedback: {}", e);
            Err(FeedbackError::Store(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;

    #[test]
    fn test_validate_trims_fields() {
        let feedback = validate_feedback("  Ada ", " ada@example.com ", " Thanks ").unwrap();
        assert_eq!(feedback.name, "Ada");
        assert_eq!(feedback.email, "ada@example.com");
        assert_eq!(feedback.message, "Thanks");
    }

    #[test]
    fn test_blank_fields_are_required() {
        let err = validate_feedback("   ", "ada@example.com", "hi").unwrap_err();
        assert_eq!(err.to_string(), "Name is required.");

        let err = validate_feedback("Ada", "ada@example.com", "").unwrap_err();
        assert_eq!(err.to_string(), "Message is required.");
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(!looks_like_email("ada"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@localhost"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("ada@example."));
        assert!(!looks_like_email("a da@example.com"));
        assert!(!looks_like_email("a@b@example.com"));
    }

    #[tokio::test]
    async fn test_submit_stores_feedback() {
        let repo = LocalRepository::new();
        let stored = submit_feedback(&repo, "Ada", "ada@example.com", "Great tool")
            .await
            .unwrap();
        assert_eq!(stored.name, "Ada");
        assert_eq!(repo.feedback_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_invalid_does_not_touch_store() {
        let repo = LocalRepository::new();
        let result = submit_feedback(&repo, "Ada", "not-an-email", "hi").await;
        assert!(matches!(result, Err(FeedbackError::Invalid(_))));
        assert_eq!(repo.feedback_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_has_friendly_message() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        let err = submit_feedback(&repo, "Ada", "ada@example.com", "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Store(_)));
        assert_eq!(err.to_string(), FEEDBACK_FAILED);
    }
}
