//! Application state and core logic

use crate::state::{Form, OnboardForm};
use crate::submit::{self, SubmitTask, Submitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// The onboarding form
    pub form: OnboardForm,
    /// Where submitted values go
    submitter: Arc<dyn Submitter>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        Self {
            form: OnboardForm::new(),
            submitter,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => {
                if self.form.active().is_some_and(|f| !f.is_text()) {
                    self.form.toggle_tos();
                } else {
                    self.submit();
                }
            }
            KeyCode::Char(' ') if self.form.active().is_some_and(|f| !f.is_text()) => {
                self.form.toggle_tos();
            }
            KeyCode::Char(' ') if self.form.is_submit_active() => {
                self.submit();
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.form.push_char(c);
            }
            KeyCode::Backspace => self.form.pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Run the submit sequence
    ///
    /// Every field becomes touched so all errors show. When the form is
    /// valid one POST is dispatched in the background and its handle
    /// returned; nothing waits on it and a second submit sends again.
    pub fn submit(&mut self) -> Option<SubmitTask> {
        self.form.touch_all();
        if !self.form.is_valid() {
            tracing::debug!(
                "Submit blocked by {} validation error(s)",
                self.form.errors().len()
            );
            return None;
        }
        Some(submit::dispatch(
            Arc::clone(&self.submitter),
            self.form.values().clone(),
        ))
    }
}
