//! Checkbox component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Render a single-row checkbox with its label
pub fn render_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_checked: bool,
    is_focused: bool,
    is_enabled: bool,
) {
    let mark = if is_checked { "[x]" } else { "[ ]" };

    let style = if !is_enabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    frame.render_widget(Paragraph::new(format!("{mark} {label}")).style(style), area);
}
