//! Form submission handlers
//!
//! Contact and newsletter forms are accepted, validated and logged. Nothing
//! is delivered or stored; a valid submission always gets the same canned
//! success response with a fresh reference id.

pub mod validation;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use validation::{mask_email, FieldError, Validator};
use validation::{MESSAGE_MAX, MESSAGE_MIN, NAME_MAX, NAME_MIN, SUBJECT_MAX};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Invalid submission: {}", format_fields(.0))]
    Validation(Vec<FieldError>),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormError {
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), FormError> {
        let mut validator = Validator::new();
        validator
            .length("name", &self.name, NAME_MIN, NAME_MAX)
            .email("email", &self.email)
            .length("message", &self.message, MESSAGE_MIN, MESSAGE_MAX);
        if let Some(subject) = &self.subject {
            validator.length("subject", subject, 0, SUBJECT_MAX);
        }
        validator.finish().map_err(FormError::Validation)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
}

impl NewsletterSubscription {
    pub fn validate(&self) -> Result<(), FormError> {
        Validator::new()
            .email("email", &self.email)
            .finish()
            .map_err(FormError::Validation)
    }
}

/// Response returned to the browser after a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub reference: Uuid,
}

impl SubmissionResponse {
    fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            reference: Uuid::new_v4(),
        }
    }
}

pub async fn submit_contact(form: ContactSubmission) -> Result<SubmissionResponse, FormError> {
    if let Err(e) = form.validate() {
        tracing::warn!("Rejected contact form: {}", e);
        crate::log_warn!("contact rejected for {}: {}", mask_email(&form.email), e);
        return Err(e);
    }

    let response = SubmissionResponse::accepted(
        "Thanks for getting in touch. We'll reply within two working days.",
    );
    tracing::info!(
        reference = %response.reference,
        email = %mask_email(&form.email),
        "Contact form received"
    );
    crate::log_info!(
        "contact {} from {} <{}> subject={:?} message_chars={}",
        response.reference,
        form.name.trim(),
        mask_email(&form.email),
        form.subject.as_deref().map(str::trim),
        form.message.trim().chars().count()
    );

    Ok(response)
}

pub async fn subscribe_newsletter(
    form: NewsletterSubscription,
) -> Result<SubmissionResponse, FormError> {
    if let Err(e) = form.validate() {
        tracing::warn!("Rejected newsletter signup: {}", e);
        crate::log_warn!("newsletter rejected: {}", e);
        return Err(e);
    }

    let response = SubmissionResponse::accepted("You're subscribed. Check your inbox to confirm.");
    tracing::info!(
        reference = %response.reference,
        email = %mask_email(&form.email),
        "Newsletter subscription received"
    );
    crate::log_info!(
        "newsletter {} for {}",
        response.reference,
        mask_email(&form.email)
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: None,
            message: "Does the 2GR-FE fit a 2009 RAV4?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_contact_accepted() {
        let response = submit_contact(contact()).await.unwrap();
        assert!(response.success);
        assert!(!response.message.is_empty());
    }

    #[tokio::test]
    async fn test_contact_references_are_unique() {
        let a = submit_contact(contact()).await.unwrap();
        let b = submit_contact(contact()).await.unwrap();
        assert_ne!(a.reference, b.reference);
    }

    #[tokio::test]
    async fn test_contact_rejected_subject() {
        let mut form = contact();
        form.subject = Some("s".repeat(201));
        let err = submit_contact(form).await.unwrap_err();
        assert_eq!(err.fields().len(), 1);
        assert_eq!(err.fields()[0].field, "subject");
    }

    #[tokio::test]
    async fn test_newsletter() {
        let ok = subscribe_newsletter(NewsletterSubscription {
            email: "  rev@limiter.io ".to_string(),
        })
        .await;
        assert!(ok.is_ok());

        let err = subscribe_newsletter(NewsletterSubscription {
            email: String::new(),
        })
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid submission: email: is required");
    }
}
