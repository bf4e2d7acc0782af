//! Mouse event handling.
//!
//! A left click on the avatar pane is the host "element selected" event and
//! triggers the bounce effect. The pane's area is recorded by the renderer
//! on every frame; before the first render no region exists and clicks fall
//! through.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::App;
use crate::store::KvStore;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event<K: KvStore>(app: &App<K>, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            match app.avatar_area {
                Some(area) if area.contains(position) => Action::TriggerBounce,
                _ => Action::None,
            }
        }
        _ => Action::None,
    }
}
