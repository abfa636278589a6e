//! Name form component
//!
//! Two required text fields and a submit button. Submitting composes the
//! full name from the values as they stand at that moment; the result
//! paragraph only exists while the composed name is non-empty.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::action::Action;
use crate::components::{Component, TextField};
use crate::compose::{compose_full_name, FormState};
use crate::config::Theme;
use crate::event::SubmitEvent;
use crate::input::focus::FocusArea;

pub const DEFAULT_TITLE: &str = "Display Full Name";
pub const SUBMIT_LABEL: &str = "Submit";
pub const RESULT_PREFIX: &str = "Full Name: ";

const FORM_MAX_WIDTH: u16 = 56;

pub struct NameForm {
    title: String,
    first_name: TextField,
    last_name: TextField,
    /// Composed on submit, empty when hidden
    full_name: String,
    focus: FocusArea,
}

impl NameForm {
    pub fn new() -> Self {
        Self::with_title(DEFAULT_TITLE)
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            first_name: TextField::new("First Name")
                .placeholder("Enter your first name")
                .required(true),
            last_name: TextField::new("Last Name")
                .placeholder("Enter your last name")
                .required(true),
            full_name: String::new(),
            focus: FocusArea::default(),
        }
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn first_name(&self) -> &str {
        self.first_name.value()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.value()
    }

    #[cfg(test)]
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name.set_value(value);
    }

    #[cfg(test)]
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name.set_value(value);
    }

    #[cfg(test)]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Text of the result paragraph, `None` while it is hidden
    pub fn result_text(&self) -> Option<String> {
        if self.full_name.is_empty() {
            None
        } else {
            Some(format!("{}{}", RESULT_PREFIX, self.full_name))
        }
    }

    /// Classification of the live field values
    pub fn form_state(&self) -> FormState {
        FormState::classify(self.first_name(), self.last_name())
    }

    pub fn focused(&self) -> FocusArea {
        self.focus
    }

    pub fn set_focus(&mut self, area: FocusArea) {
        self.focus = area;
    }

    /// Fields in focus order
    pub fn fields(&self) -> [(FocusArea, &TextField); 2] {
        [
            (FocusArea::FirstName, &self.first_name),
            (FocusArea::LastName, &self.last_name),
        ]
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FocusArea::FirstName => Some(&mut self.first_name),
            FocusArea::LastName => Some(&mut self.last_name),
            FocusArea::Submit => None,
        }
    }

    /// Submit handler. Takes over the submission from the shell, then runs
    /// the compose step against the current field values.
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();

        let state = self.form_state();
        match compose_full_name(self.first_name(), self.last_name()) {
            Some(full_name) => {
                tracing::info!(?state, "Composed full name");
                self.full_name = full_name;
            }
            None => {
                tracing::debug!(?state, "Blank name field, clearing result");
                self.full_name.clear();
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Down) => Some(Action::FocusNext),
            (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Up) => Some(Action::FocusPrev),
            // Enter in a field submits implicitly, Enter on the button activates it
            (KeyModifiers::NONE, KeyCode::Enter) => Some(Action::Submit),
            (KeyModifiers::NONE, KeyCode::Char(' ')) if !self.focus.is_field() => {
                Some(Action::Submit)
            }
            _ => self
                .focused_field_mut()
                .and_then(|field| field.handle_event(&Event::Key(key))),
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == FocusArea::Submit;
        let label = if focused {
            format!("▶ {} ◀", SUBMIT_LABEL)
        } else {
            format!("  {}  ", SUBMIT_LABEL)
        };
        let button = Paragraph::new(Line::from(Span::styled(label, theme.button_style(focused))))
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(text) = self.result_text() else {
            return;
        };
        let paragraph = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(theme.form.result_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: false });

        // Grow with the wrapped name, plus top and bottom border
        let wrapped = paragraph.line_count(area.width.saturating_sub(2));
        let height = u16::try_from(wrapped)
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let area = Rect { height, ..area };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.form.result_border.to_color()));
        frame.render_widget(paragraph.block(block), area);
    }
}

impl Default for NameForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NameForm {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(_) => self
                .focused_field_mut()
                .and_then(|field| field.handle_event(event)),
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let width = area.width.min(FORM_MAX_WIDTH);
        let card = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // First name
                Constraint::Length(3), // Last name
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Submit
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Result
            ])
            .split(card);

        let heading = Paragraph::new(Line::from(Span::styled(
            self.title.as_str(),
            Style::default()
                .fg(theme.colors.primary.to_color())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        self.first_name.render(
            frame,
            chunks[2],
            focused && self.focus == FocusArea::FirstName,
            theme,
        );
        self.last_name.render(
            frame,
            chunks[3],
            focused && self.focus == FocusArea::LastName,
            theme,
        );
        self.render_button(frame, chunks[5], theme);

        self.render_result(frame, chunks[7], theme);
    }
}
