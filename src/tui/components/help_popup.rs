//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

const BINDINGS: &[(&str, &str)] = &[
    ("←/→, h/l", "previous / next cat"),
    ("Enter, r", "rename the current cat"),
    ("b, Space", "bounce"),
    ("m", "meow notification"),
    ("click avatar", "bounce"),
    ("?", "toggle this help"),
    ("q, Esc", "quit"),
];

/// Render the help popup as a centered overlay.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup_width = 44u16.min(area.width.saturating_sub(4));
    let popup_height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![Line::raw("")];
    for (keys, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Style::new().fg(TEXT_WHITE)),
            Span::styled(*description, Style::new().fg(TEXT_DIM)),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::new().fg(ACCENT_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
