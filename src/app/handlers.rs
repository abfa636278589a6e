// Input routing and action dispatch

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;

use super::App;
use crate::action::Action;
use crate::components::Component;
use crate::error::Result;
use crate::event::SubmitEvent;
use crate::validation;

impl<B: Backend> App<B> {
    pub(super) fn handle_event(&mut self, event: CrosstermEvent) -> Option<Action> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            CrosstermEvent::Paste(text) => {
                self.status = None;
                self.form.handle_event(&CrosstermEvent::Paste(text))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        #[cfg(debug_assertions)]
        tracing::trace!("Key event: {:?}, focus: {:?}", key, self.form.focused());

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => return Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('r')) => return Some(Action::Reload),
            _ => {}
        }

        self.status = None;
        self.form.handle_event(&CrosstermEvent::Key(key))
    }

    pub(super) fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
            }
            Action::FocusNext | Action::FocusPrev => {
                self.form.update(&action);
            }
            Action::Submit => self.submit(),
            Action::Reload => self.remount(),
            Action::None => {}
        }
        self.mark_dirty();
        Ok(())
    }

    /// Validate, hand the submission to the form, then apply the default
    /// action if the form did not take it over.
    fn submit(&mut self) {
        if !self.novalidate() {
            if let Err(err) = validation::check_required(&self.form) {
                tracing::debug!(field = ?err.field, "Submission blocked: {}", err);
                self.form.set_focus(err.field);
                self.status = Some(err.to_string());
                return;
            }
        }

        let mut event = SubmitEvent::new();
        self.form.handle_submit(&mut event);
        self.finish_submit(event);
    }

    pub(super) fn finish_submit(&mut self, event: SubmitEvent) {
        if !event.is_default_prevented() {
            self.remount();
        }
    }
}
