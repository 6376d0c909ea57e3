//! Contact form rendering

use super::field_renderer::{
    draw_error_text, draw_helper_text, draw_multi_select_field, draw_select_field,
    draw_text_field,
};
use crate::app::App;
use crate::state::options::{ANIMALS, COLOURS};
use crate::state::{ContactForm, FieldName, FocusTarget};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// One vertical slot of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Field(FieldName),
    Helper(&'static str),
    Error(&'static str),
    Submit,
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Field(FieldName::Animal) => ANIMALS.len() as u16 + 2,
            Row::Field(_) | Row::Submit => BUTTON_HEIGHT,
            Row::Helper(_) | Row::Error(_) => 1,
        }
    }
}

/// Rows for the visible fields, each followed by its helper and any error
fn build_rows(form: &ContactForm) -> Vec<Row> {
    let mut rows = Vec::new();
    for name in form.visible_fields() {
        let field = form.field(name);
        rows.push(Row::Field(name));
        if let Some(text) = field.helper_text {
            rows.push(Row::Helper(text));
        }
        if let Some(err) = field.status.error() {
            rows.push(Row::Error(err.message()));
        }
    }
    rows.push(Row::Submit);
    rows
}

/// Draw the contact form card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let rows = build_rows(form);

    let mut constraints: Vec<Constraint> = rows
        .iter()
        .map(|row| Constraint::Length(row.height()))
        .collect();
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Contact Form ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let active = form.active_target();
    let masked = app.config.mask_password();

    for (row, chunk) in rows.iter().zip(chunks.iter()) {
        match *row {
            Row::Field(name) => {
                let field = form.field(name);
                let is_active = active == FocusTarget::Field(name);
                match name {
                    FieldName::Colour => {
                        draw_select_field(frame, *chunk, field, COLOURS, is_active)
                    }
                    FieldName::Animal => draw_multi_select_field(
                        frame,
                        *chunk,
                        field,
                        ANIMALS,
                        is_active,
                        form.animal_cursor,
                    ),
                    FieldName::Password => {
                        draw_text_field(frame, *chunk, field, is_active, masked)
                    }
                    FieldName::Email | FieldName::TigerType => {
                        draw_text_field(frame, *chunk, field, is_active, false)
                    }
                }
            }
            Row::Helper(text) => draw_helper_text(frame, *chunk, text),
            Row::Error(message) => draw_error_text(frame, *chunk, message),
            Row::Submit => render_button(
                frame,
                *chunk,
                "Submit",
                active == FocusTarget::SubmitButton,
                Color::Green,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldStatus;

    #[test]
    fn test_rows_without_tiger() {
        let form = ContactForm::new();
        let rows = build_rows(&form);
        assert!(!rows.contains(&Row::Field(FieldName::TigerType)));
        assert_eq!(rows.first(), Some(&Row::Field(FieldName::Email)));
        assert_eq!(rows.last(), Some(&Row::Submit));
    }

    #[test]
    fn test_rows_with_tiger_include_helper() {
        let mut form = ContactForm::new();
        form.on_animal_change(vec!["tiger".to_string()]);
        let rows = build_rows(&form);
        let pos = rows
            .iter()
            .position(|r| *r == Row::Field(FieldName::TigerType))
            .unwrap();
        assert_eq!(rows[pos + 1], Row::Helper("Enter the type of tiger"));
    }

    #[test]
    fn test_rows_include_error_after_invalid_field() {
        let mut form = ContactForm::new();
        let _ = form.validate();
        assert!(matches!(form.email.status, FieldStatus::Invalid(_)));

        let rows = build_rows(&form);
        assert_eq!(rows[1], Row::Error("Please enter a valid email"));
    }

    #[test]
    fn test_animal_row_fits_every_option() {
        assert_eq!(
            Row::Field(FieldName::Animal).height(),
            ANIMALS.len() as u16 + 2
        );
    }
}
