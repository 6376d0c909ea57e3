//! Form domain layer
//!
//! Type-safe form handling for the contact form: field values, registered
//! rules, validation status and the submission payload.

mod field;
mod form_data;
mod form_state;
mod rules;

pub use field::{FieldName, FieldValue, FormField};
pub use form_data::FormData;
pub use form_state::{ContactForm, FocusTarget, Form};
pub use rules::{FieldStatus, Rule, ValidationError, ValidationErrorKind};
