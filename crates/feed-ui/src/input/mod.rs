//! Input handling
//!
//! Translates key events into [`Action`]s for the current mode.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowHelp,
    CloseHelp,
    NextPost,
    PrevPost,
    NextComment,
    PrevComment,
    /// Focus the comment form of the current post
    StartComment,
    /// Remove the selected comment
    DeleteComment,
    InsertChar(char),
    Backspace,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Publish the draft
    Submit,
    /// Leave the form, keeping the draft
    LeaveForm,
}

/// Input handler
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Self {
        Self
    }

    /// Map a key to an action for the given mode
    pub fn map(&self, mode: AppMode, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match mode {
            AppMode::Normal => Self::map_normal(key),
            AppMode::Insert => Self::map_insert(key),
            AppMode::Help => Some(Action::CloseHelp),
        }
    }

    fn map_normal(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowHelp,
            KeyCode::Char('j') | KeyCode::Down => Action::NextPost,
            KeyCode::Char('k') | KeyCode::Up => Action::PrevPost,
            KeyCode::Char('J') | KeyCode::Tab => Action::NextComment,
            KeyCode::Char('K') | KeyCode::BackTab => Action::PrevComment,
            KeyCode::Char('c') | KeyCode::Char('i') | KeyCode::Enter => Action::StartComment,
            KeyCode::Char('x') | KeyCode::Delete => Action::DeleteComment,
            _ => return None,
        };
        Some(action)
    }

    fn map_insert(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Esc => Action::LeaveForm,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Delete => Action::DeleteForward,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorHome,
            KeyCode::End => Action::CursorEnd,
            KeyCode::Char(c) => Action::InsertChar(c),
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        let input = InputHandler::new();
        assert_eq!(input.map(AppMode::Normal, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(input.map(AppMode::Normal, key(KeyCode::Char('j'))), Some(Action::NextPost));
        assert_eq!(input.map(AppMode::Normal, key(KeyCode::Char('c'))), Some(Action::StartComment));
        assert_eq!(input.map(AppMode::Normal, key(KeyCode::Char('x'))), Some(Action::DeleteComment));
        assert_eq!(input.map(AppMode::Normal, key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_insert_mode_types_characters() {
        let input = InputHandler::new();
        assert_eq!(input.map(AppMode::Insert, key(KeyCode::Char('q'))), Some(Action::InsertChar('q')));
        assert_eq!(input.map(AppMode::Insert, key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(input.map(AppMode::Insert, key(KeyCode::Esc)), Some(Action::LeaveForm));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let input = InputHandler::new();
        assert_eq!(input.map(AppMode::Help, key(KeyCode::Char('a'))), Some(Action::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let input = InputHandler::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.map(AppMode::Insert, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let input = InputHandler::new();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(input.map(AppMode::Normal, release), None);
    }
}
