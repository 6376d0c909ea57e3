//! Application state and core logic

use crate::config::FormConfig;
use crate::sink::SubmissionSink;
use crate::state::{ContactForm, FieldName, FocusTarget, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;

/// Main application struct
pub struct App {
    /// The contact form being edited
    pub form: ContactForm,
    /// Destination for validated submissions
    pub sink: Box<dyn SubmissionSink>,
    pub config: FormConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Errors waiting to be shown in the modal error dialog
    errors: VecDeque<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: FormConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            form: ContactForm::with_default_colour(config.default_colour()),
            sink,
            config,
            quit: false,
            status_message: None,
            errors: VecDeque::new(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let target = self.form.active_target();
        let is_submit_shortcut = key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER));

        match key.code {
            _ if is_submit_shortcut => self.submit_form().await,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter if target == FocusTarget::SubmitButton => self.submit_form().await,
            // Colour single-select
            KeyCode::Left if target == FocusTarget::Field(FieldName::Colour) => {
                self.form.cycle_colour(false)
            }
            KeyCode::Right if target == FocusTarget::Field(FieldName::Colour) => {
                self.form.cycle_colour(true)
            }
            // Animal multi-select
            KeyCode::Left if target == FocusTarget::Field(FieldName::Animal) => {
                self.form.prev_animal_option()
            }
            KeyCode::Right if target == FocusTarget::Field(FieldName::Animal) => {
                self.form.next_animal_option()
            }
            KeyCode::Char(' ') | KeyCode::Enter
                if target == FocusTarget::Field(FieldName::Animal) =>
            {
                self.form.toggle_highlighted_animal()
            }
            // Text input
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c)
            }
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form, hand the payload to the sink and reset on success.
    ///
    /// Invalid fields keep their inline errors and nothing is dispatched.
    /// A sink failure leaves the form populated and queues an error dialog.
    pub async fn submit_form(&mut self) {
        let data = match self.form.validate() {
            Ok(data) => data,
            Err(errors) => {
                tracing::debug!(invalid = errors.len(), "Submission rejected");
                let (noun, verb) = if errors.len() == 1 {
                    ("field", "needs")
                } else {
                    ("fields", "need")
                };
                self.status_message = Some(format!("{} {noun} {verb} attention", errors.len()));
                return;
            }
        };

        match self.sink.submit(&data).await {
            Ok(()) => {
                self.form.reset();
                self.status_message = Some("Submitted!".to_string());
            }
            Err(err) => {
                tracing::error!(error = %err, "Submission failed");
                self.push_error(format!("Failed to submit form: {err}"));
            }
        }
    }
}
