//! Application state: wires the selection controller to input modes and
//! the feedback effects.

use ratatui::layout::Rect;

use crate::effects::{Bounce, HostNotify, notify_meow};
use crate::events::Action;
use crate::selector::{Direction, Selector};
use crate::store::KvStore;
use crate::surface::{Surface, TuiSurface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Navigation mode
    Rename, // Editing the name field
    Help,   // Help popup showing all hotkeys
}

pub struct App<K: KvStore> {
    pub selector: Selector<TuiSurface, K>,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub bounce: Bounce,
    /// Avatar pane area from the last render, used for click hit-testing
    pub avatar_area: Option<Rect>,
    notifier: Option<Box<dyn HostNotify>>,
}

impl<K: KvStore> App<K> {
    pub fn new(selector: Selector<TuiSurface, K>, notifier: Option<Box<dyn HostNotify>>) -> Self {
        Self {
            selector,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            bounce: Bounce::new(),
            avatar_area: None,
            notifier,
        }
    }

    /// Apply a user action. Returns `false` when the app should quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::NextCat => self.selector.advance(Direction::Next),
            Action::PrevCat => self.selector.advance(Direction::Prev),
            Action::TriggerBounce => self.bounce.trigger(),
            Action::TriggerNotify => notify_meow(self.notifier.as_deref()),
            Action::EnterRename => self.enter_rename(),
            Action::CommitRename => self.commit_rename(),
            Action::CancelRename => self.cancel_rename(),
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Normal,
            Action::InputChar(c) => self.input_char(c),
            Action::InputBackspace => self.input_backspace(),
            Action::InputDelete => self.input_delete(),
            Action::InputLeft => self.input_left(),
            Action::InputRight => self.input_right(),
            Action::InputHome => self.cursor_position = 0,
            Action::InputEnd => self.input_end(),
            Action::None => {}
        }
        true
    }

    /// Advance animation state (called on every loop tick)
    pub fn tick(&mut self) {
        self.bounce.tick();
    }

    /// Enter rename mode with the cursor at the end of the field
    pub fn enter_rename(&mut self) {
        self.input_mode = InputMode::Rename;
        self.cursor_position = self.selector.surface().name().len();
    }

    /// Commit the field contents as the new name for the current cat
    pub fn commit_rename(&mut self) {
        let raw = self.selector.surface().name().to_string();
        self.selector.rename_current(&raw);
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Leave rename mode, restoring the field from the catalog
    pub fn cancel_rename(&mut self) {
        self.selector.sync_presentation();
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Add a character to the name field at the cursor
    pub fn input_char(&mut self, c: char) {
        let field = self.selector.surface_mut().field_mut();
        field.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn input_backspace(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let field = self.selector.surface_mut().field_mut();
        if let Some((start, _)) = field[..self.cursor_position].char_indices().next_back() {
            field.remove(start);
            self.cursor_position = start;
        }
    }

    /// Delete the character at the cursor
    pub fn input_delete(&mut self) {
        let field = self.selector.surface_mut().field_mut();
        if self.cursor_position < field.len() {
            field.remove(self.cursor_position);
        }
    }

    /// Move cursor left
    pub fn input_left(&mut self) {
        let name = self.selector.surface().name();
        if let Some((start, _)) = name[..self.cursor_position].char_indices().next_back() {
            self.cursor_position = start;
        }
    }

    /// Move cursor right
    pub fn input_right(&mut self) {
        let name = self.selector.surface().name();
        if let Some(c) = name[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    /// Move cursor to end of the field
    pub fn input_end(&mut self) {
        self.cursor_position = self.selector.surface().name().len();
    }
}
