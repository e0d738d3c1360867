//! Page layout shared by rendering and mouse hit-testing
//!
//! Elements flow vertically inside the page block. The same slot
//! computation backs both drawing and click resolution, so a click maps
//! to exactly the element drawn at that position.

use super::components::button::BUTTON_HEIGHT;
use super::components::text_input::{INPUT_HEIGHT, TEXTAREA_HEIGHT};
use crate::page::{Document, Element, InputType, NodeId, Tag};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// One rendered element and the rows it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub node: NodeId,
    pub rect: Rect,
}

/// Split the frame into the page area and the one-row status bar
pub fn screen_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Inner content area of the bordered page block
pub fn page_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Compute the slot for every visible element, in document order.
/// Elements past the bottom edge are clipped.
pub fn page_slots(doc: &Document, area: Rect) -> Vec<Slot> {
    let mut slots = Vec::new();
    let mut y = area.y;
    walk(doc, doc.root(), area, &mut y, &mut slots);
    slots
}

fn walk(doc: &Document, id: NodeId, area: Rect, y: &mut u16, slots: &mut Vec<Slot>) {
    for &child in doc.children(id) {
        let el = doc.element(child);
        let is_container =
            el.tag == Tag::Form || (el.tag == Tag::Div && !doc.children(child).is_empty());
        if is_container {
            walk(doc, child, area, y, slots);
            continue;
        }

        let height = element_height(el);
        if *y + height > area.y + area.height {
            return;
        }
        let width = element_width(el, area.width);
        slots.push(Slot {
            node: child,
            rect: Rect::new(area.x, *y, width, height),
        });
        *y += height;
    }
}

/// Find the element drawn at the given screen position
pub fn hit_test(doc: &Document, area: Rect, column: u16, row: u16) -> Option<NodeId> {
    page_slots(doc, area)
        .into_iter()
        .find(|slot| contains(slot.rect, column, row))
        .map(|slot| slot.node)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

fn element_height(el: &Element) -> u16 {
    match el.tag {
        Tag::Label | Tag::Div | Tag::Link => 1,
        Tag::Textarea => TEXTAREA_HEIGHT,
        Tag::Button => BUTTON_HEIGHT,
        Tag::Input => match el.input_type() {
            InputType::Checkbox => 1,
            InputType::Submit | InputType::Button => BUTTON_HEIGHT,
            _ => INPUT_HEIGHT,
        },
        Tag::Form => 0,
    }
}

fn element_width(el: &Element, available: u16) -> u16 {
    let caption = el.text.len() as u16;
    match el.tag {
        Tag::Button => (caption + 4).min(available),
        Tag::Link => caption.max(1).min(available),
        Tag::Input => match el.input_type() {
            InputType::Checkbox => (caption + 4).min(available),
            InputType::Submit | InputType::Button => (caption + 4).min(available),
            _ => available,
        },
        _ => available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    /// form > (text input, checkbox, button), then a trailing link
    fn build_doc() -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), Element::new(Tag::Form));

        let mut input = Element::new(Tag::Input);
        input.text = "Name".to_string();
        let input = doc.append(form, input);

        let mut checkbox = Element::new(Tag::Input);
        checkbox.set_attr("type", "checkbox");
        checkbox.text = "alice".to_string();
        let checkbox = doc.append(form, checkbox);

        let mut button = Element::new(Tag::Button);
        button.text = "Save".to_string();
        let button = doc.append(form, button);

        let mut link = Element::new(Tag::Link);
        link.text = "Back".to_string();
        let link = doc.append(doc.root(), link);

        (doc, vec![input, checkbox, button, link])
    }

    #[test]
    fn test_screen_areas_reserves_status_row() {
        let (page, status) = screen_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(page.height, 23);
        assert_eq!(status.y, 23);
        assert_eq!(status.height, 1);
    }

    #[test]
    fn test_page_inner_shrinks_by_borders() {
        let inner = page_inner(Rect::new(0, 0, 80, 24));
        assert_eq!(inner, Rect::new(1, 1, 78, 22));
    }

    #[test]
    fn test_slots_flow_vertically_through_containers() {
        let (doc, ids) = build_doc();
        let slots = page_slots(&doc, Rect::new(0, 0, 40, 24));

        let nodes: Vec<NodeId> = slots.iter().map(|s| s.node).collect();
        assert_eq!(nodes, ids);

        // input (3 rows), checkbox (1), button (3), link (1)
        assert_eq!(slots[0].rect.y, 0);
        assert_eq!(slots[1].rect.y, 3);
        assert_eq!(slots[2].rect.y, 4);
        assert_eq!(slots[3].rect.y, 7);
    }

    #[test]
    fn test_button_width_follows_caption() {
        let (doc, ids) = build_doc();
        let slots = page_slots(&doc, Rect::new(0, 0, 40, 24));
        let button_slot = slots.iter().find(|s| s.node == ids[2]).unwrap();
        assert_eq!(button_slot.rect.width, 8); // "Save" + padding/borders
    }

    #[test]
    fn test_slots_clip_at_bottom_edge() {
        let (doc, _) = build_doc();
        let slots = page_slots(&doc, Rect::new(0, 0, 40, 4));
        // Only the input (3 rows) and the checkbox (1 row) fit.
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_hit_test_finds_button() {
        let (doc, ids) = build_doc();
        let area = Rect::new(0, 0, 40, 24);
        assert_eq!(hit_test(&doc, area, 2, 5), Some(ids[2]));
    }

    #[test]
    fn test_hit_test_misses_outside_button_width() {
        let (doc, _) = build_doc();
        let area = Rect::new(0, 0, 40, 24);
        // Button is 8 cells wide; a click far to the right hits nothing.
        assert_eq!(hit_test(&doc, area, 30, 5), None);
    }

    #[test]
    fn test_hit_test_empty_area() {
        let (doc, _) = build_doc();
        assert_eq!(hit_test(&doc, Rect::new(0, 0, 0, 0), 0, 0), None);
    }
}
