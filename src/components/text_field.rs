//! Single-line labeled text input

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::action::Action;
use crate::components::Component;
use crate::config::Theme;

pub struct TextField {
    label: String,
    placeholder: String,
    required: bool,
    value: String,
    /// Cursor position in chars, not bytes
    cursor: usize,
}

impl TextField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            required: false,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole value and park the cursor at the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert pasted text at the cursor. Line breaks are dropped.
    pub fn paste_text(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Display column of the cursor; wide characters take two cells
    fn cursor_column(&self) -> usize {
        let byte_pos = char_to_byte_pos(&self.value, self.cursor);
        self.value[..byte_pos].width()
    }

    /// Columns to skip so the cursor stays inside `width`, snapped to a
    /// character boundary
    fn scroll_offset(&self, width: usize) -> usize {
        let cursor_col = self.cursor_column();
        let mut skipped = 0;
        for c in self.value.chars() {
            if width == 0 || cursor_col.saturating_sub(skipped) < width {
                break;
            }
            skipped += c.width().unwrap_or(0);
        }
        skipped
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_pos(&self.value, self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_pos = char_to_byte_pos(&self.value, self.cursor - 1);
        self.value.remove(byte_pos);
        self.cursor -= 1;
    }

    fn delete_char_at(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let byte_pos = char_to_byte_pos(&self.value, self.cursor);
        self.value.remove(byte_pos);
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Returns `Some(Action::None)` when the key edited the field, `None` to let it bubble up
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.clear();
                Some(Action::None)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => {
                self.cursor = 0;
                Some(Action::None)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => {
                self.cursor = self.char_count();
                Some(Action::None)
            }
            (_, KeyCode::Backspace) => {
                self.delete_char_before();
                Some(Action::None)
            }
            (_, KeyCode::Delete) => {
                self.delete_char_at();
                Some(Action::None)
            }
            (_, KeyCode::Left) => {
                self.move_left();
                Some(Action::None)
            }
            (_, KeyCode::Right) => {
                self.move_right();
                Some(Action::None)
            }
            (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.insert_char(c);
                Some(Action::None)
            }
            _ => None,
        }
    }

    /// Title shown on the field border, e.g. ` First Name * `
    fn title<'a>(&'a self, focused: bool, theme: &Theme) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!(" {}", self.label),
            theme.title_style(focused),
        )];
        if self.required {
            spans.push(Span::styled(
                " *",
                Style::default().fg(theme.form.required_marker.to_color()),
            ));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Component for TextField {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(text) => {
                self.paste_text(text);
                Some(Action::None)
            }
            _ => None,
        }
    }

    fn update(&mut self, _action: &Action) {}

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .title(self.title(focused, theme))
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));
        let inner = block.inner(area);

        let content = if self.value.is_empty() {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(theme.form.placeholder.to_color()),
            ))
        } else {
            Line::from(Span::styled(
                self.value.as_str(),
                Style::default().fg(theme.colors.foreground.to_color()),
            ))
        };

        // Keep the cursor in view on narrow terminals
        let scroll = self.scroll_offset(inner.width as usize);
        let scroll_cols = u16::try_from(scroll).unwrap_or(u16::MAX);

        let paragraph = Paragraph::new(content)
            .block(block)
            .scroll((0, scroll_cols));
        frame.render_widget(paragraph, area);

        if focused && inner.width > 0 && inner.height > 0 {
            let offset = self.cursor_column().saturating_sub(scroll);
            let x = inner.x + u16::try_from(offset).unwrap_or(0).min(inner.width - 1);
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

/// Convert a character index to a byte index in a string
fn char_to_byte_pos(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
