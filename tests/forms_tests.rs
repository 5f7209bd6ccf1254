//! Form submission tests

use motorspec::forms::{
    submit_contact, subscribe_newsletter, ContactSubmission, FormError, NewsletterSubscription,
};

#[tokio::test]
async fn test_contact_form_success() {
    let response = submit_contact(ContactSubmission {
        name: "Sam Carter".to_string(),
        email: "sam@garage.example".to_string(),
        subject: Some("N47 chain".to_string()),
        message: "What mileage should the N47 timing chain be replaced at?".to_string(),
    })
    .await
    .unwrap();

    assert!(response.success);
    assert_eq!(response.reference.get_version_num(), 4);
}

#[tokio::test]
async fn test_contact_form_reports_every_field() {
    let err = submit_contact(ContactSubmission {
        name: " ".to_string(),
        email: "sam@".to_string(),
        subject: None,
        message: "hi".to_string(),
    })
    .await
    .unwrap_err();

    let FormError::Validation(fields) = &err;
    let names: Vec<_> = fields.iter().map(|f| f.field).collect();
    assert_eq!(names, vec!["name", "email", "message"]);
    assert!(err.to_string().starts_with("Invalid submission: name:"));
}

#[tokio::test]
async fn test_newsletter_rejects_bad_email() {
    let err = subscribe_newsletter(NewsletterSubscription {
        email: "not an email".to_string(),
    })
    .await
    .unwrap_err();
    assert_eq!(err.fields()[0].message, "must be a valid email address");
}

#[test]
fn test_submission_json_shape() {
    let form: ContactSubmission = serde_json::from_str(
        r#"{"name": "Ana", "email": "ana@example.com", "message": "Hello from the form"}"#,
    )
    .unwrap();
    assert!(form.subject.is_none());
    assert!(form.validate().is_ok());
}

#[tokio::test]
async fn test_rejections_reach_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forms.log");
    motorspec::logging::init_logger_at(&path).unwrap();

    let contact = submit_contact(ContactSubmission {
        name: "Pat".to_string(),
        email: "pat@example.com".to_string(),
        subject: None,
        message: "short".to_string(),
    })
    .await;
    assert!(contact.is_err());

    let newsletter = subscribe_newsletter(NewsletterSubscription {
        email: "pat".to_string(),
    })
    .await;
    assert!(newsletter.is_err());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("WARN: contact rejected for"));
    assert!(content.contains("message: must be at least 10 characters"));
    assert!(content.contains("WARN: newsletter rejected: Invalid submission: email:"));
}
