//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, InputMode};
use crate::store::KvStore;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event<K: KvStore>(app: &App<K>, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::Rename => handle_rename_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Cat navigation
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            Action::NextCat
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => Action::PrevCat,

        // Effects
        KeyCode::Char('b') | KeyCode::Char(' ') => Action::TriggerBounce,
        KeyCode::Char('m') => Action::TriggerNotify,

        // Rename the current cat
        KeyCode::Char('r') | KeyCode::Enter => Action::EnterRename,

        _ => Action::None,
    }
}

fn handle_rename_mode(key: KeyEvent) -> Action {
    match key.code {
        // Enter commits, Esc reverts to the stored name
        KeyCode::Enter => Action::CommitRename,
        KeyCode::Esc => Action::CancelRename,

        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        KeyCode::Char(c) => Action::InputChar(c),

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            Action::CloseHelp
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Selector;
    use crate::store::MemoryStore;
    use crate::surface::TuiSurface;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn fresh_app() -> App<MemoryStore> {
        let selector = Selector::new(TuiSurface::new(), MemoryStore::new()).unwrap();
        App::new(selector, None)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let app = fresh_app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Right)), Action::NextCat);
        assert_eq!(handle_key_event(&app, key(KeyCode::Left)), Action::PrevCat);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('b'))),
            Action::TriggerBounce
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('m'))),
            Action::TriggerNotify
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_rename_mode_commit_and_cancel() {
        let mut app = fresh_app();
        app.apply(Action::EnterRename);

        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Action::CommitRename);
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CancelRename);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('q'))),
            Action::InputChar('q')
        );
    }

    #[test]
    fn test_help_mode_closes_on_escape() {
        let mut app = fresh_app();
        app.apply(Action::OpenHelp);

        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CloseHelp);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('x'))), Action::None);
    }
}
