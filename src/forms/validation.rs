//! Field validation for form submissions

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid");
}

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects field errors so all of them can be reported at once
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        max: usize,
    ) -> &mut Self {
        let len = value.trim().chars().count();
        if len < min {
            self.errors.push(FieldError {
                field,
                message: if min == 1 {
                    "is required".to_string()
                } else {
                    format!("must be at least {} characters", min)
                },
            });
        } else if len > max {
            self.errors.push(FieldError {
                field,
                message: format!("must be at most {} characters", max),
            });
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        let value = value.trim();
        if value.is_empty() {
            self.errors.push(FieldError {
                field,
                message: "is required".to_string(),
            });
        } else if value.len() > 254 || !is_valid_email(value) {
            self.errors.push(FieldError {
                field,
                message: "must be a valid email address".to_string(),
            });
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// "jane.doe@example.com" -> "j***@example.com"
pub fn mask_email(email: &str) -> String {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
