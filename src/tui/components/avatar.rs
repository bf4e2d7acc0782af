//! Avatar pane component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::store::KvStore;
use crate::tui::art;
use crate::tui::theme::*;

/// Render the avatar pane: the current cat's sprite, vertically centered,
/// shifted up by the bounce offset while the animation runs.
pub fn render_avatar<K: KvStore>(frame: &mut Frame, area: Rect, app: &mut App<K>) {
    // Remember the pane for click hit-testing
    app.avatar_area = Some(area);

    let class = app.selector.surface().avatar_class().to_string();
    let (position, total) = app.selector.position();

    let block = Block::default()
        .title(format!(" {} · {}/{} ", class, position, total))
        .title_style(Style::new().fg(ACCENT_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(if app.bounce.is_active() {
            ACCENT_MINT
        } else {
            TEXT_DIM
        }));

    let inner = block.inner(area);
    let sprite = art::sprite(&class).unwrap_or_else(art::fallback_sprite);
    let coat = art::coat(&class);

    // Center vertically, then lift by the bounce offset
    let padding = (inner.height as usize).saturating_sub(sprite.len()) / 2;
    let padding = padding.saturating_sub(app.bounce.offset() as usize);

    let mut lines: Vec<Line> = Vec::with_capacity(padding + sprite.len());
    for _ in 0..padding {
        lines.push(Line::raw(""));
    }
    for row in sprite {
        lines.push(Line::styled(*row, Style::new().fg(coat)));
    }

    let paragraph = Paragraph::new(lines).block(block).centered();
    frame.render_widget(paragraph, area);
}
