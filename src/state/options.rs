//! Static option lists for the select fields

/// A single `{value, label}` entry shown in a select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Colours offered by the single-select. Values double as terminal colour names.
pub const COLOURS: &[SelectOption] = &[
    SelectOption::new("red", "Red"),
    SelectOption::new("green", "Green"),
    SelectOption::new("yellow", "Yellow"),
    SelectOption::new("blue", "Blue"),
    SelectOption::new("magenta", "Magenta"),
    SelectOption::new("cyan", "Cyan"),
];

/// Animals offered by the multi-select
pub const ANIMALS: &[SelectOption] = &[
    SelectOption::new("bear", "Bear"),
    SelectOption::new("cat", "Cat"),
    SelectOption::new("dog", "Dog"),
    SelectOption::new("lion", "Lion"),
    SelectOption::new("snake", "Snake"),
    SelectOption::new("tiger", "Tiger"),
];

/// Colour selected before the user picks one
pub const DEFAULT_COLOUR: &str = "red";

/// Animal whose selection reveals the tiger type field
pub const TIGER: &str = "tiger";

pub fn contains(options: &[SelectOption], value: &str) -> bool {
    position(options, value).is_some()
}

pub fn position(options: &[SelectOption], value: &str) -> Option<usize> {
    options.iter().position(|o| o.value == value)
}

/// Label for a value, falling back to the raw value
pub fn label_for<'a>(options: &'a [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
        .unwrap_or(value)
}
