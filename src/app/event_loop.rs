// Event loop - main run() method

use std::time::Duration;

use crossterm::event;
use ratatui::backend::Backend;

use super::{App, POLL_INTERVAL_MS};
use crate::error::{DisplayNameError, Result};

impl<B: Backend> App<B> {
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(novalidate = self.novalidate(), "Form mounted");

        loop {
            // ---- 1. Poll user input (keys/paste/resize) ----

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))
                .map_err(|e| DisplayNameError::Terminal(e.to_string()))?
            {
                let event = event::read().map_err(|e| DisplayNameError::Terminal(e.to_string()))?;

                // Any input, including a resize, gets a fresh frame
                self.mark_dirty();

                if let Some(action) = self.handle_event(event) {
                    self.dispatch(action)?;
                }
            }

            if self.should_quit() {
                break;
            }

            // ---- 2. Draw once if anything changed ----

            if self.needs_redraw {
                self.draw()?;
                self.needs_redraw = false;
            }
        }

        Ok(())
    }
}
