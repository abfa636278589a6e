// App module
// - mod.rs: App struct, terminal setup/teardown, accessors
// - event_loop.rs: main run() loop
// - handlers.rs: input routing and action dispatch
// - rendering.rs: draw()

mod event_loop;
mod handlers;
mod rendering;

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::components::NameForm;
use crate::config::ConfigManager;
use crate::error::{DisplayNameError, Result};

pub(super) const POLL_INTERVAL_MS: u64 = 16;

pub struct App<B: Backend> {
    terminal: Terminal<B>,
    should_quit: bool,
    needs_redraw: bool,
    form: NameForm,
    config_manager: ConfigManager,
    /// Validation message shown in the status line until the next keystroke
    status: Option<String>,
    /// Leave raw mode and the alternate screen on drop
    restore_terminal: bool,
}

impl App<CrosstermBackend<Stdout>> {
    pub fn new(config_manager: ConfigManager) -> Result<Self> {
        enable_raw_mode().map_err(|e| DisplayNameError::Terminal(e.to_string()))?;
        let terminal = Self::setup_terminal().map_err(|e| {
            leave_terminal();
            e
        })?;

        let mut app = Self::with_terminal(terminal, config_manager);
        app.restore_terminal = true;
        Ok(app)
    }

    /// Alternate screen and terminal over stdout; raw mode is already on
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .map_err(|e| DisplayNameError::Terminal(e.to_string()))?;

        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|e| DisplayNameError::Terminal(e.to_string()))
    }
}

impl<B: Backend> App<B> {
    /// Build an app over an already prepared terminal
    pub fn with_terminal(terminal: Terminal<B>, config_manager: ConfigManager) -> Self {
        let form = NameForm::with_title(config_manager.app_config().form.title.clone());
        Self {
            terminal,
            should_quit: false,
            needs_redraw: true,
            form,
            config_manager,
            status: None,
            restore_terminal: false,
        }
    }

    #[cfg(test)]
    pub fn form(&self) -> &NameForm {
        &self.form
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn novalidate(&self) -> bool {
        self.config_manager.app_config().form.novalidate
    }

    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(super) fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Fresh mount of the form: every value back to its initial state
    pub(super) fn remount(&mut self) {
        self.form = NameForm::with_title(self.config_manager.app_config().form.title.clone());
        self.status = None;
        tracing::info!("Form remounted");
    }
}

/// Undo raw mode, the alternate screen and bracketed paste. Errors are
/// ignored, the shell gets back whatever could be restored.
fn leave_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
}

impl<B: Backend> Drop for App<B> {
    fn drop(&mut self) {
        if self.restore_terminal {
            leave_terminal();
            let _ = self.terminal.show_cursor();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    use crate::action::Action;
    use crate::components::buffer_lines;
    use crate::event::SubmitEvent;
    use crate::input::focus::FocusArea;

    struct Harness {
        app: App<TestBackend>,
        _config_dir: TempDir,
    }

    fn harness(novalidate: bool) -> Harness {
        let config_dir = TempDir::new().unwrap();
        let mut config_manager = ConfigManager::from_dir(config_dir.path().to_path_buf());
        config_manager.app_config_mut().form.novalidate = novalidate;
        let terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        Harness {
            app: App::with_terminal(terminal, config_manager),
            _config_dir: config_dir,
        }
    }

    fn press(app: &mut App<TestBackend>, code: KeyCode, modifiers: KeyModifiers) {
        let event = CrosstermEvent::Key(KeyEvent::new(code, modifiers));
        if let Some(action) = app.handle_event(event) {
            app.dispatch(action).unwrap();
        }
    }

    fn type_str(app: &mut App<TestBackend>, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn fill_and_submit(app: &mut App<TestBackend>, first: &str, last: &str) {
        type_str(app, first);
        press(app, KeyCode::Tab, KeyModifiers::NONE);
        type_str(app, last);
        press(app, KeyCode::Enter, KeyModifiers::NONE);
    }

    fn screen(app: &mut App<TestBackend>) -> Vec<String> {
        app.draw().unwrap();
        buffer_lines(app.terminal().backend().buffer())
    }

    fn screen_contains(app: &mut App<TestBackend>, needle: &str) -> bool {
        screen(app).iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_prepared_terminal_is_left_alone() {
        let h = harness(false);
        assert!(!h.app.restore_terminal);
    }

    #[test]
    fn test_full_name_shown_after_submit() {
        let mut h = harness(false);
        fill_and_submit(&mut h.app, "John", "Doe");
        assert_eq!(h.app.form().full_name(), "John Doe");
        assert!(screen_contains(&mut h.app, "Full Name: John Doe"));
    }

    #[test]
    fn test_special_characters_via_keyboard() {
        let mut h = harness(false);
        fill_and_submit(&mut h.app, "Jean-Pierre", "O'Connor123");
        assert!(screen_contains(&mut h.app, "Full Name: Jean-Pierre O'Connor123"));
    }

    #[test]
    fn test_submit_does_not_remount() {
        let mut h = harness(false);
        fill_and_submit(&mut h.app, "John", "Doe");
        assert_eq!(h.app.form().first_name(), "John");
        assert_eq!(h.app.form().last_name(), "Doe");
    }

    #[test]
    fn test_unprevented_submit_remounts_form() {
        let mut h = harness(false);
        fill_and_submit(&mut h.app, "John", "Doe");

        h.app.finish_submit(SubmitEvent::new());
        assert_eq!(h.app.form().first_name(), "");
        assert_eq!(h.app.form().full_name(), "");
        assert!(!screen_contains(&mut h.app, "Full Name:"));
    }

    #[test]
    fn test_validation_blocks_empty_first_name() {
        let mut h = harness(false);
        press(&mut h.app, KeyCode::Tab, KeyModifiers::NONE);
        type_str(&mut h.app, "Doe");
        press(&mut h.app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(h.app.form().focused(), FocusArea::FirstName);
        assert_eq!(h.app.status(), Some("First Name: Please fill out this field."));
        assert!(screen_contains(&mut h.app, "Please fill out this field."));
        assert!(!screen_contains(&mut h.app, "Full Name:"));
    }

    #[test]
    fn test_validation_blocks_empty_last_name() {
        let mut h = harness(false);
        type_str(&mut h.app, "John");
        press(&mut h.app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(h.app.form().focused(), FocusArea::LastName);
        assert!(!screen_contains(&mut h.app, "Full Name:"));
    }

    #[test]
    fn test_validation_leaves_previous_result() {
        let mut h = harness(false);
        fill_and_submit(&mut h.app, "John", "Doe");
        press(&mut h.app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        press(&mut h.app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(h.app.status().is_some());
        assert_eq!(h.app.form().full_name(), "John Doe");
    }

    #[test]
    fn test_keystroke_clears_status() {
        let mut h = harness(false);
        press(&mut h.app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(h.app.status().is_some());

        type_str(&mut h.app, "J");
        assert_eq!(h.app.status(), None);
    }

    #[test]
    fn test_whitespace_passes_validation_but_shows_nothing() {
        let mut h = harness(false);
        fill_and_submit(&mut h.app, "   ", "Doe");
        assert_eq!(h.app.status(), None);
        assert!(!screen_contains(&mut h.app, "Full Name:"));
    }

    #[test]
    fn test_novalidate_submits_empty_fields() {
        let mut h = harness(true);
        fill_and_submit(&mut h.app, "John", "Doe");
        press(&mut h.app, KeyCode::BackTab, KeyModifiers::SHIFT);
        press(&mut h.app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        press(&mut h.app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(h.app.novalidate());
        assert_eq!(h.app.status(), None);
        assert_eq!(h.app.form().full_name(), "");
        assert!(!screen_contains(&mut h.app, "Full Name:"));
    }

    #[test]
    fn test_submit_with_no_edits_novalidate() {
        let mut h = harness(true);
        press(&mut h.app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(!screen_contains(&mut h.app, "Full Name:"));
    }

    #[test]
    fn test_reload_resets_everything() {
        let mut h = harness(false);
        fill_and_submit(&mut h.app, "John", "Doe");
        press(&mut h.app, KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(h.app.form().first_name(), "");
        assert_eq!(h.app.form().last_name(), "");
        assert_eq!(h.app.form().full_name(), "");
        assert_eq!(h.app.form().focused(), FocusArea::FirstName);
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut h = harness(false);
        press(&mut h.app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(h.app.should_quit());

        let mut h = harness(false);
        press(&mut h.app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(h.app.should_quit());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut h = harness(false);
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(h.app.handle_event(CrosstermEvent::Key(release)), None);
        assert_eq!(h.app.form().first_name(), "");
    }

    #[test]
    fn test_paste_reaches_focused_field() {
        let mut h = harness(false);
        let action = h.app.handle_event(CrosstermEvent::Paste("Jean-Pierre".to_string()));
        assert_eq!(action, Some(Action::None));
        assert_eq!(h.app.form().first_name(), "Jean-Pierre");
    }

    #[test]
    fn test_status_line_shows_hints() {
        let mut h = harness(false);
        assert!(screen_contains(&mut h.app, "Enter submit"));
    }

    #[test]
    fn test_configured_title_survives_remount() {
        let config_dir = TempDir::new().unwrap();
        std::fs::write(
            config_dir.path().join("config.toml"),
            "[form]\ntitle = \"Who are you?\"\n",
        )
        .unwrap();
        let config_manager = ConfigManager::from_dir(config_dir.path().to_path_buf());
        let terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut app = App::with_terminal(terminal, config_manager);

        app.dispatch(Action::Reload).unwrap();
        assert_eq!(app.form().title(), "Who are you?");
        assert!(screen_contains(&mut app, "Who are you?"));
    }
}
