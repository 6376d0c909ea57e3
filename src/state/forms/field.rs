//! Form field value objects

use super::rules::{FieldStatus, Rule};
use std::fmt;

/// Names of the fields registered on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Email,
    Password,
    Colour,
    Animal,
    TigerType,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 5] = [
        FieldName::Email,
        FieldName::Password,
        FieldName::Colour,
        FieldName::Animal,
        FieldName::TigerType,
    ];

    /// Key used in the submitted payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Colour => "colour",
            Self::Animal => "animal",
            Self::TigerType => "tigerType",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Colour => "Colour",
            Self::Animal => "Animals",
            Self::TigerType => "Type of tiger",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(String),
    Choices(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.is_empty(),
            FieldValue::Choices(v) => v.is_empty(),
        }
    }
}

/// Represents a single form field with its value, rule and validation status
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
    pub rule: Rule,
    pub status: FieldStatus,
    /// Hint rendered under the field
    pub helper_text: Option<&'static str>,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: FieldName) -> Self {
        Self::with_value(name, FieldValue::Text(String::new()))
    }

    /// Create a single-select field with an initial selection
    pub fn choice(name: FieldName, value: &str) -> Self {
        Self::with_value(name, FieldValue::Choice(value.to_string()))
    }

    /// Create an empty multi-select field
    pub fn choices(name: FieldName) -> Self {
        Self::with_value(name, FieldValue::Choices(Vec::new()))
    }

    fn with_value(name: FieldName, value: FieldValue) -> Self {
        Self {
            name,
            value,
            rule: Rule::default(),
            status: FieldStatus::Untouched,
            helper_text: None,
        }
    }

    pub fn with_helper_text(mut self, text: &'static str) -> Self {
        self.helper_text = Some(text);
        self
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Get the text value (returns empty string for multi-select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => s,
            FieldValue::Choices(_) => "",
        }
    }

    /// Get the selected values (empty for text fields)
    pub fn as_choices(&self) -> &[String] {
        match &self.value {
            FieldValue::Choices(v) => v,
            _ => &[],
        }
    }

    /// Push a character to a text value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value and forget any validation result
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.clear(),
            FieldValue::Choices(v) => v.clear(),
        }
        self.status = FieldStatus::Untouched;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.clone(),
            FieldValue::Choices(v) => v.join(", "),
        }
    }
}
