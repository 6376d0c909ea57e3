//! Validation rules and per-field validation status

use super::field::{FieldName, FieldValue};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Email pattern, kept exactly as the form has always shipped it.
/// Lowercase only and TLDs of 2-4 letters.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$").expect("email pattern compiles")
});

/// At least eight characters of any kind, line breaks included
pub static PASSWORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s).{8,}").expect("password pattern compiles"));

/// Constraint registered against a field
#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub pattern: Option<Regex>,
    pub required: bool,
}

impl Rule {
    pub fn pattern(pattern: Regex) -> Self {
        Self {
            pattern: Some(pattern),
            required: false,
        }
    }

    pub fn required() -> Self {
        Self {
            pattern: None,
            required: true,
        }
    }

    /// Check a value against this rule. `required` is checked before `pattern`.
    pub fn evaluate(&self, field: FieldName, value: &FieldValue) -> Result<(), ValidationError> {
        if self.required && value.is_empty() {
            return Err(ValidationError::new(field, ValidationErrorKind::Required));
        }

        if let Some(pattern) = &self.pattern {
            let matches = match value {
                FieldValue::Text(s) | FieldValue::Choice(s) => pattern.is_match(s),
                FieldValue::Choices(values) => values.iter().all(|v| pattern.is_match(v)),
            };
            if !matches {
                return Err(ValidationError::new(
                    field,
                    ValidationErrorKind::PatternMismatch,
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    PatternMismatch,
    Required,
}

/// A failed rule on a single field. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", reason(.field, .kind))]
pub struct ValidationError {
    pub field: FieldName,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: FieldName, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    /// Inline message shown next to the field
    pub fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (FieldName::Email, ValidationErrorKind::PatternMismatch) => {
                "Please enter a valid email"
            }
            (FieldName::Password, ValidationErrorKind::PatternMismatch) => {
                "Password must be at least 8 characters"
            }
            (_, ValidationErrorKind::PatternMismatch) => "Invalid value",
            (_, ValidationErrorKind::Required) => "This is required",
        }
    }
}

fn reason(field: &FieldName, kind: &ValidationErrorKind) -> String {
    match (field, kind) {
        (FieldName::Email, ValidationErrorKind::PatternMismatch) => {
            "invalid email format".to_string()
        }
        (FieldName::Password, ValidationErrorKind::PatternMismatch) => {
            "password too short".to_string()
        }
        (FieldName::TigerType, ValidationErrorKind::Required) => "tiger type required".to_string(),
        (field, ValidationErrorKind::PatternMismatch) => format!("{field} is invalid"),
        (field, ValidationErrorKind::Required) => format!("{field} is required"),
    }
}

/// Per-field validation state. `Validating` only exists during a submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Validating,
    Valid,
    Invalid(ValidationError),
}

impl FieldStatus {
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FieldStatus::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
