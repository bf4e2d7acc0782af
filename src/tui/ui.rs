use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use crate::store::KvStore;

use super::components::{render_avatar, render_help_popup, render_name_field};
use super::theme::*;

pub fn render<K: KvStore>(frame: &mut Frame, app: &mut App<K>) {
    let area = frame.area();

    // Main vertical layout: title, avatar pane, name field, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Title + spacing
        Constraint::Min(7),    // Avatar pane
        Constraint::Length(3), // Name field
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_avatar(frame, main_layout[1], app);
    render_name_field(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area);
    }
}

fn render_title(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled("ᓚᘏᗢ ", Style::new().fg(COAT_ORANGE)),
        Span::styled("catpick", Style::new().fg(ACCENT_MINT).bold()),
    ]);
    frame.render_widget(Paragraph::new(line).centered(), area);
}

fn render_hotkeys<K: KvStore>(frame: &mut Frame, area: ratatui::layout::Rect, app: &App<K>) {
    let line = match app.input_mode {
        InputMode::Rename => Line::from(vec![
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" commit · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" cancel", Style::new().fg(TEXT_DIM)),
        ]),
        _ => Line::from(vec![
            Span::styled("[←/→]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" cycle · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" rename · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[b]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" bounce · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[m]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" meow · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" help · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" quit", Style::new().fg(TEXT_DIM)),
        ]),
    };
    frame.render_widget(Paragraph::new(line).centered(), area);
}
