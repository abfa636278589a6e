// Rendering - draw() and the status line

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::App;
use crate::components::Component;
use crate::error::{DisplayNameError, Result};

const KEY_HINTS: &str = "Tab next field · Enter submit · Ctrl+R reset · Esc quit";

impl<B: Backend> App<B> {
    pub(super) fn draw(&mut self) -> Result<()> {
        let form = &self.form;
        let theme = self.config_manager.theme();
        let status = self.status.as_deref();

        self.terminal
            .draw(|frame| {
                let background = Block::default()
                    .style(Style::default().bg(theme.colors.background.to_color()));
                frame.render_widget(background, frame.area());

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Min(0),
                        Constraint::Length(1),
                    ])
                    .split(frame.area());

                form.render(frame, chunks[1], true, theme);

                let status_line = match status {
                    Some(message) => Line::from(Span::styled(
                        format!(" {}", message),
                        Style::default()
                            .fg(theme.colors.warning.to_color())
                            .add_modifier(Modifier::BOLD),
                    )),
                    None => Line::from(Span::styled(
                        format!(" {}", KEY_HINTS),
                        Style::default().fg(theme.colors.muted.to_color()),
                    )),
                };
                frame.render_widget(Paragraph::new(status_line), chunks[2]);
            })
            .map_err(|e| DisplayNameError::Terminal(e.to_string()))?;

        Ok(())
    }
}
