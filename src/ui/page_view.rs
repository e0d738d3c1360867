//! Rendering of the installed page

use super::components::button::render_button;
use super::components::checkbox::render_checkbox;
use super::components::text_input::render_text_input;
use super::layout;
use crate::app::App;
use crate::page::{Element, InputType, Tag};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the page block and every element inside it
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.state.page_title));
    frame.render_widget(block, area);

    let inner = layout::page_inner(area);
    for slot in layout::page_slots(&app.state.document, inner) {
        let el = app.state.document.element(slot.node);
        let is_focused = app.state.focus == Some(slot.node);
        draw_element(frame, slot.rect, el, is_focused);
    }
}

fn draw_element(frame: &mut Frame, rect: Rect, el: &Element, is_focused: bool) {
    match el.tag {
        Tag::Label | Tag::Div => {
            frame.render_widget(Paragraph::new(el.text.clone()), rect);
        }
        Tag::Link => draw_link(frame, rect, el, is_focused),
        Tag::Textarea => render_text_input(frame, rect, &el.text, &el.value, is_focused),
        Tag::Button => render_button(frame, rect, &el.text, is_focused, !el.is_disabled()),
        Tag::Input => match el.input_type() {
            InputType::Checkbox => render_checkbox(
                frame,
                rect,
                &el.text,
                el.checked,
                is_focused,
                !el.is_disabled(),
            ),
            InputType::Submit | InputType::Button => {
                render_button(frame, rect, submit_caption(el), is_focused, !el.is_disabled());
            }
            _ => render_text_input(frame, rect, &el.text, &el.value, is_focused),
        },
        Tag::Form => {}
    }
}

/// Submit inputs caption from `value` when no text is set, as in markup
fn submit_caption(el: &Element) -> &str {
    if el.text.is_empty() {
        &el.value
    } else {
        &el.text
    }
}

fn draw_link(frame: &mut Frame, rect: Rect, el: &Element, is_focused: bool) {
    let style = if el.is_disabled() {
        // The dimmed, inert rendition of a guard-disabled link
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    frame.render_widget(Paragraph::new(el.text.clone()).style(style), rect);
}
