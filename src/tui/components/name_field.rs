//! Editable display-name field component.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};
use crate::store::KvStore;
use crate::surface::Surface;
use crate::tui::theme::*;

/// Render the name field. In rename mode the field shows the in-progress
/// edit with a live cursor; otherwise it mirrors the stored display name.
pub fn render_name_field<K: KvStore>(frame: &mut Frame, area: Rect, app: &App<K>) {
    let renaming = app.input_mode == InputMode::Rename;
    let name = app.selector.surface().name();

    let block = Block::default()
        .title(if renaming {
            " Name · editing ".to_string()
        } else {
            " Name ".to_string()
        })
        .title_style(Style::new().fg(if renaming { ACCENT_MINT } else { TEXT_DIM }))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(if renaming { ACCENT_MINT } else { TEXT_DIM }));

    let inner = block.inner(area);
    let text_style = if renaming {
        Style::new().fg(TEXT_WHITE)
    } else {
        Style::new().fg(COAT_CREAM)
    };

    let paragraph = Paragraph::new(name).style(text_style).block(block);
    frame.render_widget(paragraph, area);

    if renaming {
        // Cursor column is in characters, not bytes
        let column = name[..app.cursor_position].chars().count() as u16;
        frame.set_cursor_position(Position::new(inner.x + column, inner.y));
    }
}
