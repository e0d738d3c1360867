//! UI module for rendering the TUI

pub mod components;
pub mod layout;
mod page_view;

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (page_area, status_area) = layout::screen_areas(frame.area());
    page_view::draw(frame, page_area, app);
    draw_status_bar(frame, status_area, app);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(err) = app.state.current_error() {
        (
            format!("Error: {err} (Enter to dismiss)"),
            Style::default().fg(Color::Red),
        )
    } else if let Some(message) = &app.state.status_message {
        (message.clone(), Style::default().fg(Color::Green))
    } else {
        (
            "Tab: move  Enter: activate  Space: toggle  Ctrl+C: quit".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}
