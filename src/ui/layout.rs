//! Layout and status bar

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form card gets
pub const FORM_WIDTH: u16 = 60;

/// Split the screen into a horizontally centered form column and a status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let width = chunks[0].width.min(FORM_WIDTH);
    let [form_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(chunks[0]);

    (form_area, chunks[1])
}

/// Draw the status bar: key hints on the left, the latest feedback message
/// right-aligned in its own area so the hints never push it off screen
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let message_width = app
        .status_message
        .as_deref()
        .map_or(0, |msg| msg.chars().count() as u16 + 2)
        .min(area.width);
    let [hints_area, message_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(message_width)])
            .areas(area);

    let key = Style::default().fg(Color::Cyan);
    let hints = Line::from(vec![
        Span::raw(" "),
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled("←/→", key),
        Span::raw(": choose  "),
        Span::styled("Space", key),
        Span::raw(": toggle  "),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::raw(": submit  "),
        Span::styled("Esc", key),
        Span::raw(": quit"),
    ]);
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        hints_area,
    );

    if let Some(msg) = &app.status_message {
        let color = if app.form.invalid_count() > 0 {
            Color::Yellow
        } else {
            Color::Green
        };
        let message = Paragraph::new(Line::from(Span::styled(
            format!("{msg} "),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(message, message_area);
    }
}
