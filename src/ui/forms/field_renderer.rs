//! Field rendering utilities for forms

use crate::state::options::{self, SelectOption};
use crate::state::{FieldStatus, FormField};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURSOR: &str = "▌";
const MASK: char = '•';

/// Bordered block titled with the field label. Invalid fields get a red border.
fn field_block(field: &FormField, is_active: bool) -> Block<'static> {
    let border_color = match (&field.status, is_active) {
        (FieldStatus::Invalid(_), _) => Color::Red,
        (_, true) => Color::Cyan,
        _ => Color::DarkGray,
    };

    Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// Draw a single-line text field. `masked` replaces every character with a bullet.
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    masked: bool,
) {
    let value = if masked {
        MASK.to_string().repeat(field.as_text().chars().count())
    } else {
        field.display_value()
    };

    let line = if value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let cursor = if is_active { CURSOR } else { "" };
        Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    frame.render_widget(
        Paragraph::new(line).block(field_block(field, is_active)),
        area,
    );
}

/// Draw a single-select showing the current option in its own colour
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    choices: &[SelectOption],
    is_active: bool,
) {
    let value = field.as_text();
    let label = options::label_for(choices, value);
    let swatch = value.parse::<Color>().unwrap_or(Color::Reset);
    let arrows = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrows),
        Span::styled(
            label.to_string(),
            Style::default().fg(swatch).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", arrows),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(field_block(field, is_active)),
        area,
    );
}

/// Draw a multi-select as a checkbox list. `cursor` is the highlighted option.
pub fn draw_multi_select_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    choices: &[SelectOption],
    is_active: bool,
    cursor: usize,
) {
    let selected = field.as_choices();
    let lines: Vec<Line> = choices
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let checked = selected.iter().any(|v| v == option.value);
            let checkbox = if checked { "[x]" } else { "[ ]" };
            let is_highlighted = is_active && i == cursor;
            let style = if is_highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if checked {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let marker = if is_highlighted { "›" } else { " " };
            Line::from(Span::styled(
                format!("{marker} {checkbox} {}", option.label),
                style,
            ))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(field_block(field, is_active)),
        area,
    );
}

/// Draw the hint line under a field
pub fn draw_helper_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

/// Draw an inline validation message, right-aligned under its field
pub fn draw_error_text(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(error, area);
}
