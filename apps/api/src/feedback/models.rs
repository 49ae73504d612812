use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// A feedback form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Feedback {
    /// Shape checks only: all fields present, email plausibly an address.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::Validation("Email must not be empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation(format!(
                "'{}' does not look like an email address",
                self.email
            )));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::Validation("Message must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Returned to the UI once a submission has been accepted by the sink.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub status: String,
}

impl FeedbackReceipt {
    pub fn accepted() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            status: "accepted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_feedback() -> Feedback {
        Feedback {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Great dashboard".to_string(),
        }
    }

    #[test]
    fn test_valid_feedback_passes() {
        assert!(make_feedback().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut feedback = make_feedback();
        feedback.name = "   ".to_string();
        assert!(matches!(
            feedback.validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_email_without_at_rejected() {
        let mut feedback = make_feedback();
        feedback.email = "ada.example.com".to_string();
        let err = feedback.validate().unwrap_err();
        assert!(err.to_string().contains("ada.example.com"));
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut feedback = make_feedback();
        feedback.message = String::new();
        assert!(feedback.validate().is_err());
    }

    #[test]
    fn test_receipt_reports_accepted() {
        let receipt = FeedbackReceipt::accepted();
        assert_eq!(receipt.status, "accepted");
    }
}
