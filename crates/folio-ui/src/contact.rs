//! Contact form validation and simulated submission.
//!
//! Submissions never leave the process: a valid form produces a
//! [`Receipt`] describing what a real backend would have acknowledged.
//!
//! # Example
//!
//! ```rust
//! use folio_ui::{ContactForm, ContactValidator};
//!
//! let form = ContactForm {
//!     name: "Ada".into(),
//!     email: "ada@example.com".into(),
//!     subject: None,
//!     message: "Loved the compiler talk!".into(),
//! };
//!
//! let receipt = ContactValidator::new().submit(&form).unwrap();
//! assert!(receipt.message.contains("Ada"));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const SUBJECT_MAX_LEN: usize = 150;
pub const MESSAGE_MAX_LEN: usize = 5000;
pub const DEFAULT_MIN_MESSAGE_LEN: usize = 10;
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem with one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("email address is not valid")]
    InvalidEmail,
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::TooShort { field, .. } | FieldError::TooLong { field, .. } => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

/// Error returned by [`ContactValidator::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
}

/// The values entered in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Acknowledgement of a simulated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Reference derived from the form contents.
    pub reference: String,
    /// How long the simulated send takes.
    #[serde(skip)]
    pub latency: Duration,
    /// Confirmation shown to the sender.
    pub message: String,
}

/// Validates contact forms and simulates sending them.
#[derive(Debug, Clone)]
pub struct ContactValidator {
    min_message_len: usize,
    latency: Duration,
}

impl ContactValidator {
    pub fn new() -> Self {
        Self {
            min_message_len: DEFAULT_MIN_MESSAGE_LEN,
            latency: DEFAULT_SIMULATED_LATENCY,
        }
    }

    pub fn min_message_len(mut self, len: usize) -> Self {
        self.min_message_len = len;
        self
    }

    pub fn simulated_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Checks every field; returns all problems in field order.
    pub fn validate(&self, form: &ContactForm) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = form.name.trim();
        if let Some(e) = check_length(Field::Name, name, NAME_MIN_LEN, NAME_MAX_LEN, true) {
            errors.push(e);
        }

        let email = form.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::InvalidEmail);
        }

        if let Some(subject) = form.subject.as_deref().map(str::trim) {
            if let Some(e) = check_length(Field::Subject, subject, 0, SUBJECT_MAX_LEN, false) {
                errors.push(e);
            }
        }

        let message = form.message.trim();
        if let Some(e) = check_length(
            Field::Message,
            message,
            self.min_message_len,
            MESSAGE_MAX_LEN,
            true,
        ) {
            errors.push(e);
        }

        errors
    }

    /// Validates the form and, if it passes, returns a simulated receipt.
    ///
    /// No data is sent anywhere.
    pub fn submit(&self, form: &ContactForm) -> Result<Receipt, SubmitError> {
        let errors = self.validate(form);
        if !errors.is_empty() {
            tracing::debug!("contact form rejected: {} error(s)", errors.len());
            return Err(SubmitError::Invalid(errors));
        }

        let mut hasher = DefaultHasher::new();
        form.hash(&mut hasher);
        let reference = format!("MSG-{:08X}", hasher.finish() as u32);
        tracing::info!("simulated contact submission {}", reference);

        Ok(Receipt {
            reference,
            latency: self.latency,
            message: format!(
                "Thanks, {}! Your message has been sent. I'll get back to you soon.",
                form.name.trim()
            ),
        })
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_length(
    field: Field,
    value: &str,
    min: usize,
    max: usize,
    required: bool,
) -> Option<FieldError> {
    let len = value.chars().count();
    if len == 0 {
        return required.then_some(FieldError::Required(field));
    }
    if len < min {
        Some(FieldError::TooShort { field, min })
    } else if len > max {
        Some(FieldError::TooLong { field, max })
    } else {
        None
    }
}
