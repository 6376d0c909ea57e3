//! Contact form state: field registration, selection changes and validation

use super::field::{FieldName, FieldValue, FormField};
use super::form_data::FormData;
use super::rules::{FieldStatus, Rule, ValidationError, EMAIL_PATTERN, PASSWORD_PATTERN};
use crate::state::options::{self, ANIMALS, COLOURS, DEFAULT_COLOUR, TIGER};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Something that can hold keyboard focus on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldName),
    SubmitButton,
}

/// The contact form: every field, its rule and its status in one place
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub email: FormField,
    pub password: FormField,
    pub colour: FormField,
    pub animal: FormField,
    pub tiger_type: FormField,
    pub active_field_index: usize,
    /// Highlighted row in the animal multi-select
    pub animal_cursor: usize,
    default_colour: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_default_colour(DEFAULT_COLOUR)
    }

    /// Create a form whose colour starts (and resets) to `colour`.
    /// Unknown colours fall back to the built-in default.
    pub fn with_default_colour(colour: &str) -> Self {
        let default_colour = if options::contains(COLOURS, colour) {
            colour.to_string()
        } else {
            tracing::warn!(colour, "Unknown default colour, using {DEFAULT_COLOUR}");
            DEFAULT_COLOUR.to_string()
        };

        let mut form = Self {
            email: FormField::text(FieldName::Email),
            password: FormField::text(FieldName::Password),
            colour: FormField::choice(FieldName::Colour, &default_colour)
                .with_helper_text("Choose a colour"),
            animal: FormField::choices(FieldName::Animal)
                .with_helper_text("Choose one or more animals"),
            tiger_type: FormField::text(FieldName::TigerType)
                .with_helper_text("Enter the type of tiger"),
            active_field_index: 0,
            animal_cursor: 0,
            default_colour,
        };

        form.register_field(FieldName::Email, Rule::pattern(EMAIL_PATTERN.clone()));
        form.register_field(
            FieldName::Password,
            Rule::pattern(PASSWORD_PATTERN.clone()),
        );
        form.register_field(FieldName::Colour, Rule::default());
        form.register_field(FieldName::Animal, Rule::default());
        form.register_field(FieldName::TigerType, Rule::required());
        form
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Colour => &self.colour,
            FieldName::Animal => &self.animal,
            FieldName::TigerType => &self.tiger_type,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::Colour => &mut self.colour,
            FieldName::Animal => &mut self.animal,
            FieldName::TigerType => &mut self.tiger_type,
        }
    }

    /// Attach a rule to a field, replacing the previous one
    pub fn register_field(&mut self, name: FieldName, rule: Rule) {
        self.field_mut(name).rule = rule;
    }

    pub fn colour(&self) -> &str {
        self.colour.as_text()
    }

    pub fn animals(&self) -> &[String] {
        self.animal.as_choices()
    }

    /// The tiger type field is shown only while "tiger" is selected
    pub fn is_tiger_type_visible(&self) -> bool {
        self.animals().iter().any(|a| a == TIGER)
    }

    pub fn is_visible(&self, name: FieldName) -> bool {
        match name {
            FieldName::TigerType => self.is_tiger_type_visible(),
            _ => true,
        }
    }

    /// Fields currently rendered, in display order
    pub fn visible_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|name| self.is_visible(*name))
            .collect()
    }

    /// Replace the colour selection. Values outside the colour list are ignored.
    pub fn on_colour_change(&mut self, value: &str) {
        if !options::contains(COLOURS, value) {
            tracing::warn!(value, "Ignoring unknown colour");
            return;
        }
        self.colour.value = FieldValue::Choice(value.to_string());
    }

    /// Replace the animal selection wholesale. Unknown values and repeats are dropped.
    pub fn on_animal_change(&mut self, values: Vec<String>) {
        let focused = self.active_target();

        let mut selected: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !options::contains(ANIMALS, &value) {
                tracing::warn!(value = %value, "Ignoring unknown animal");
                continue;
            }
            if !selected.contains(&value) {
                selected.push(value);
            }
        }
        self.animal.value = FieldValue::Choices(selected);

        if !self.is_tiger_type_visible() {
            self.tiger_type.status = FieldStatus::Untouched;
        }

        // Keep focus on the same target unless it just disappeared
        let target = match focused {
            FocusTarget::Field(FieldName::TigerType) if !self.is_tiger_type_visible() => {
                FocusTarget::Field(FieldName::Animal)
            }
            other => other,
        };
        self.focus(target);
    }

    /// Select the next (or previous) colour in the list, wrapping around
    pub fn cycle_colour(&mut self, forward: bool) {
        let count = COLOURS.len();
        let current = options::position(COLOURS, self.colour()).unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.on_colour_change(COLOURS[next].value);
    }

    pub fn next_animal_option(&mut self) {
        self.animal_cursor = (self.animal_cursor + 1) % ANIMALS.len();
    }

    pub fn prev_animal_option(&mut self) {
        if self.animal_cursor == 0 {
            self.animal_cursor = ANIMALS.len() - 1;
        } else {
            self.animal_cursor -= 1;
        }
    }

    /// Toggle the highlighted animal and apply the resulting selection
    pub fn toggle_highlighted_animal(&mut self) {
        let Some(option) = ANIMALS.get(self.animal_cursor) else {
            return;
        };

        let mut values = self.animals().to_vec();
        if let Some(pos) = values.iter().position(|v| v == option.value) {
            values.remove(pos);
        } else {
            values.push(option.value.to_string());
        }
        self.on_animal_change(values);
    }

    pub fn active_target(&self) -> FocusTarget {
        self.visible_fields()
            .get(self.active_field_index)
            .copied()
            .map(FocusTarget::Field)
            .unwrap_or(FocusTarget::SubmitButton)
    }

    pub fn focus(&mut self, target: FocusTarget) {
        let visible = self.visible_fields();
        self.active_field_index = match target {
            FocusTarget::Field(name) => visible
                .iter()
                .position(|f| *f == name)
                .unwrap_or(visible.len()),
            FocusTarget::SubmitButton => visible.len(),
        };
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Evaluate every visible field's rule from scratch.
    ///
    /// Each visible field moves through `Validating` to `Valid` or `Invalid`.
    /// Hidden fields are left `Untouched` and their rules are skipped.
    pub fn validate(&mut self) -> Result<FormData, Vec<ValidationError>> {
        let visible = self.visible_fields();
        let mut errors = Vec::new();

        for name in FieldName::ALL {
            let field = self.field_mut(name);
            if !visible.contains(&name) {
                field.status = FieldStatus::Untouched;
                continue;
            }

            field.status = FieldStatus::Validating;
            let result = field.rule.evaluate(name, &field.value);
            field.status = match result {
                Ok(()) => FieldStatus::Valid,
                Err(err) => {
                    errors.push(err.clone());
                    FieldStatus::Invalid(err)
                }
            };
        }

        if errors.is_empty() {
            Ok(self.form_data())
        } else {
            Err(errors)
        }
    }

    /// Current values as a payload. A hidden tiger type contributes an empty string.
    pub fn form_data(&self) -> FormData {
        let tiger_type = if self.is_tiger_type_visible() {
            self.tiger_type.as_text().to_string()
        } else {
            String::new()
        };

        FormData {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            colour: self.colour().to_string(),
            animal: self.animals().to_vec(),
            tiger_type,
        }
    }

    pub fn error_for(&self, name: FieldName) -> Option<&ValidationError> {
        self.field(name).status.error()
    }

    pub fn invalid_count(&self) -> usize {
        FieldName::ALL
            .iter()
            .filter(|name| self.error_for(**name).is_some())
            .count()
    }

    /// Restore initial values and statuses. Registered rules are kept.
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.colour.value = FieldValue::Choice(self.default_colour.clone());
        self.active_field_index = 0;
        self.animal_cursor = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        // visible fields + submit button
        self.visible_fields().len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_target() {
            FocusTarget::Field(name) => Some(self.field_mut(name)),
            FocusTarget::SubmitButton => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ValidationErrorKind;

    fn type_into(form: &mut ContactForm, name: FieldName, text: &str) {
        form.focus(FocusTarget::Field(name));
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        type_into(&mut form, FieldName::Email, "x@y.co");
        type_into(&mut form, FieldName::Password, "abcdefgh");
        form
    }

    mod defaults {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ContactForm::new();
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.password.as_text(), "");
            assert_eq!(form.colour(), "red");
            assert!(form.animals().is_empty());
            assert_eq!(form.tiger_type.as_text(), "");
            assert_eq!(form.active_field_index, 0);
            assert!(FieldName::ALL
                .iter()
                .all(|n| form.field(*n).status == FieldStatus::Untouched));
        }

        #[test]
        fn test_registered_rules() {
            let form = ContactForm::new();
            assert!(form.email.rule.pattern.is_some());
            assert!(form.password.rule.pattern.is_some());
            assert!(form.tiger_type.rule.required);
            assert!(form.colour.rule.pattern.is_none() && !form.colour.rule.required);
            assert!(form.animal.rule.pattern.is_none() && !form.animal.rule.required);
        }

        #[test]
        fn test_custom_default_colour() {
            let form = ContactForm::with_default_colour("blue");
            assert_eq!(form.colour(), "blue");
        }

        #[test]
        fn test_unknown_default_colour_falls_back() {
            let form = ContactForm::with_default_colour("chartreuse");
            assert_eq!(form.colour(), "red");
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_colour_change_replaces_value() {
            let mut form = ContactForm::new();
            form.on_colour_change("blue");
            assert_eq!(form.colour(), "blue");
        }

        #[test]
        fn test_unknown_colour_is_ignored() {
            let mut form = ContactForm::new();
            form.on_colour_change("blue");
            form.on_colour_change("plaid");
            assert_eq!(form.colour(), "blue");
        }

        #[test]
        fn test_cycle_colour_wraps() {
            let mut form = ContactForm::new();
            form.cycle_colour(false);
            assert_eq!(form.colour(), COLOURS[COLOURS.len() - 1].value);
            form.cycle_colour(true);
            assert_eq!(form.colour(), "red");
        }

        #[test]
        fn test_animal_change_is_total_replacement() {
            let mut form = ContactForm::new();
            form.on_animal_change(strings(&["tiger", "cat"]));
            assert!(form.is_tiger_type_visible());

            form.on_animal_change(strings(&["cat"]));
            assert_eq!(form.animals(), &["cat".to_string()]);
            assert!(!form.is_tiger_type_visible());
            assert!(!form.visible_fields().contains(&FieldName::TigerType));
        }

        #[test]
        fn test_animal_change_drops_unknown_and_duplicates() {
            let mut form = ContactForm::new();
            form.on_animal_change(strings(&["dog", "wombat", "dog", "cat"]));
            assert_eq!(form.animals(), &strings(&["dog", "cat"])[..]);
        }

        #[test]
        fn test_toggle_highlighted_animal() {
            let mut form = ContactForm::new();
            form.animal_cursor = options::position(ANIMALS, "tiger").unwrap();
            form.toggle_highlighted_animal();
            assert_eq!(form.animals(), &strings(&["tiger"])[..]);
            form.toggle_highlighted_animal();
            assert!(form.animals().is_empty());
        }

        #[test]
        fn test_animal_cursor_wraps() {
            let mut form = ContactForm::new();
            form.prev_animal_option();
            assert_eq!(form.animal_cursor, ANIMALS.len() - 1);
            form.next_animal_option();
            assert_eq!(form.animal_cursor, 0);
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_field_count_tracks_tiger_visibility() {
            let mut form = ContactForm::new();
            assert_eq!(form.field_count(), 5);
            form.on_animal_change(strings(&["tiger"]));
            assert_eq!(form.field_count(), 6);
        }

        #[test]
        fn test_next_field_cycles_to_submit_and_back() {
            let mut form = ContactForm::new();
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_target(), FocusTarget::SubmitButton);
            form.next_field();
            assert_eq!(form.active_target(), FocusTarget::Field(FieldName::Email));
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert_eq!(form.active_target(), FocusTarget::SubmitButton);
        }

        #[test]
        fn test_focus_moves_off_hidden_tiger_type() {
            let mut form = ContactForm::new();
            form.on_animal_change(strings(&["tiger"]));
            form.focus(FocusTarget::Field(FieldName::TigerType));
            form.on_animal_change(vec![]);
            assert_eq!(form.active_target(), FocusTarget::Field(FieldName::Animal));
        }

        #[test]
        fn test_submit_focus_survives_visibility_change() {
            let mut form = ContactForm::new();
            form.on_animal_change(strings(&["tiger"]));
            form.focus(FocusTarget::SubmitButton);
            form.on_animal_change(vec![]);
            assert_eq!(form.active_target(), FocusTarget::SubmitButton);
        }

        #[test]
        fn test_input_ignored_on_submit_button() {
            let mut form = ContactForm::new();
            form.focus(FocusTarget::SubmitButton);
            form.input_char('x');
            assert!(form.get_active_field_mut().is_none());
            assert_eq!(form.email.as_text(), "");
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_produces_payload() {
            let mut form = filled_form();
            form.on_colour_change("blue");
            form.on_animal_change(strings(&["dog"]));

            let data = form.validate().unwrap();
            assert_eq!(
                data,
                FormData {
                    email: "x@y.co".to_string(),
                    password: "abcdefgh".to_string(),
                    colour: "blue".to_string(),
                    animal: strings(&["dog"]),
                    tiger_type: String::new(),
                }
            );
            assert_eq!(form.email.status, FieldStatus::Valid);
            assert_eq!(form.tiger_type.status, FieldStatus::Untouched);
        }

        #[test]
        fn test_invalid_fields_are_marked() {
            let mut form = ContactForm::new();
            type_into(&mut form, FieldName::Email, "A@b.co");
            type_into(&mut form, FieldName::Password, "1234567");

            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 2);
            assert_eq!(
                form.error_for(FieldName::Email).map(|e| e.kind),
                Some(ValidationErrorKind::PatternMismatch)
            );
            assert_eq!(
                form.error_for(FieldName::Password).map(|e| e.to_string()),
                Some("password too short".to_string())
            );
            assert_eq!(form.colour.status, FieldStatus::Valid);
            assert_eq!(form.invalid_count(), 2);
        }

        #[test]
        fn test_tiger_type_required_only_with_tiger() {
            let mut form = filled_form();
            form.on_animal_change(strings(&["tiger"]));

            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, FieldName::TigerType);
            assert_eq!(errors[0].kind, ValidationErrorKind::Required);

            form.on_animal_change(vec![]);
            assert!(form.validate().is_ok());
        }

        #[test]
        fn test_tiger_type_included_when_visible() {
            let mut form = filled_form();
            form.on_animal_change(strings(&["tiger"]));
            type_into(&mut form, FieldName::TigerType, "bengal");

            let data = form.validate().unwrap();
            assert_eq!(data.tiger_type, "bengal");
        }

        #[test]
        fn test_hidden_tiger_type_is_not_submitted() {
            let mut form = filled_form();
            form.on_animal_change(strings(&["tiger"]));
            type_into(&mut form, FieldName::TigerType, "bengal");
            form.on_animal_change(strings(&["cat"]));

            let data = form.validate().unwrap();
            assert_eq!(data.tiger_type, "");
        }

        #[test]
        fn test_revalidation_clears_previous_errors() {
            let mut form = ContactForm::new();
            assert!(form.validate().is_err());
            type_into(&mut form, FieldName::Email, "a@b.co");
            type_into(&mut form, FieldName::Password, "12345678");
            assert!(form.validate().is_ok());
            assert_eq!(form.invalid_count(), 0);
        }

        #[test]
        fn test_registered_rule_replaces_default() {
            let mut form = filled_form();
            form.register_field(FieldName::Animal, Rule::required());
            let errors = form.validate().unwrap_err();
            assert_eq!(errors[0].field, FieldName::Animal);
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn test_reset_restores_initial_state() {
            let mut form = filled_form();
            form.on_colour_change("cyan");
            form.on_animal_change(strings(&["tiger", "cat"]));
            type_into(&mut form, FieldName::TigerType, "siberian");
            let _ = form.validate();

            form.reset();

            let fresh = ContactForm::new();
            assert_eq!(form.form_data(), fresh.form_data());
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.animal_cursor, 0);
            assert_eq!(form.invalid_count(), 0);
            assert!(FieldName::ALL
                .iter()
                .all(|n| form.field(*n).status == FieldStatus::Untouched));
        }

        #[test]
        fn test_reset_keeps_registered_rules() {
            let mut form = ContactForm::new();
            form.register_field(FieldName::Animal, Rule::required());
            form.reset();
            assert!(form.animal.rule.required);
        }

        #[test]
        fn test_reset_uses_configured_default_colour() {
            let mut form = ContactForm::with_default_colour("green");
            form.on_colour_change("blue");
            form.reset();
            assert_eq!(form.colour(), "green");
        }
    }
}
