//! Text input component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input height in rows (top border + content + bottom border)
pub const INPUT_HEIGHT: u16 = 3;

/// Textarea height in rows (borders + two content rows)
pub const TEXTAREA_HEIGHT: u16 = 4;

/// Render a bordered text input (or textarea) with its label as title
pub fn render_text_input(frame: &mut Frame, area: Rect, label: &str, value: &str, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {label} "));

    frame.render_widget(Paragraph::new(value.to_string()).block(block), area);
}
