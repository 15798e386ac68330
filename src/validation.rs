//! Form validation for the issue report form.
//!
//! Validation never submits anything: it annotates each field with at most one
//! inline error message and reports whether the whole form passed.

use crate::constants::{MSG_FIELD_REQUIRED, MSG_INVALID_EMAIL, MSG_INVALID_PHONE};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    EmptyField,
    #[error("Please enter a valid email address")]
    BadEmail,
    #[error("Please enter a valid phone number")]
    BadPhone,
}

impl ValidationError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::EmptyField => MSG_FIELD_REQUIRED,
            ValidationError::BadEmail => MSG_INVALID_EMAIL,
            ValidationError::BadPhone => MSG_INVALID_PHONE,
        }
    }
}

/// One input of a form, with its inline error marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    #[must_use]
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Replace any existing error marker with `message`
    pub fn mark_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Strip spaces, hyphens and parentheses from a phone number
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates an already-normalized phone number
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Check one field without touching its error marker
pub fn check_field(field: &FormField) -> Result<(), ValidationError> {
    let trimmed = field.value.trim();
    if field.required && trimmed.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    if field.value.is_empty() {
        return Ok(());
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(&field.value) => Err(ValidationError::BadEmail),
        FieldKind::Phone if !is_valid_phone(&normalize_phone(&field.value)) => Err(ValidationError::BadPhone),
        _ => Ok(()),
    }
}

/// Validate every field, marking failures and clearing stale markers.
///
/// Returns `true` when all fields pass.
pub fn validate_form(fields: &mut [FormField]) -> bool {
    let mut is_valid = true;
    for field in fields.iter_mut() {
        match check_field(field) {
            Ok(()) => field.clear_error(),
            Err(error) => {
                log::debug!("Validation: field '{}' failed: {}", field.name, error);
                field.mark_error(error.message());
                is_valid = false;
            }
        }
    }
    is_valid
}
