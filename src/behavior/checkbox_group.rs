//! Checkbox-group widgets
//!
//! Two declarative relationships drive these:
//! - a checkbox with `data-toggle-target` controls every checkbox its
//!   selector matches;
//! - an element with `data-button-enable` is enabled iff its
//!   `data-checkbox-group` selector matches at least one checked box.
//!
//! Invalid or missing selectors make the operation a no-op.

use crate::page::{Document, NodeId, SelectorList};
use tracing::debug;

/// Toggle-all declaration on a checkbox
pub const TOGGLE_TARGET_ATTR: &str = "data-toggle-target";

/// Marker for group-gated buttons
pub const BUTTON_ENABLE_ATTR: &str = "data-button-enable";

/// Gating-group selector on a group-gated button
pub const CHECKBOX_GROUP_ATTR: &str = "data-checkbox-group";

/// A checkbox's checked state just flipped. Applies toggle-all when the
/// source declares a target, then recomputes dependent button states if
/// anything could have changed.
pub fn on_change(doc: &mut Document, source: NodeId) {
    if doc.element(source).attr(TOGGLE_TARGET_ATTR).is_some() {
        toggle_all(doc, source);
    } else if in_declared_group(doc, source) {
        update_button_state(doc);
    }
}

/// Set every checkbox matched by the source's `data-toggle-target`
/// selector to the source's checked state, then recompute button states.
pub fn toggle_all(doc: &mut Document, source: NodeId) {
    let Some(selector) = doc.element(source).attr(TOGGLE_TARGET_ATTR).map(str::to_string)
    else {
        return;
    };
    let list = match SelectorList::parse(&selector) {
        Ok(list) => list,
        Err(err) => {
            debug!("ignoring toggle-all selector {selector:?}: {err}");
            return;
        }
    };
    let checked = doc.element(source).checked;
    for id in doc.query_all(&list) {
        doc.element_mut(id).checked = checked;
    }
    update_button_state(doc);
}

/// Recompute the disabled state of every `data-button-enable` element:
/// disabled iff its gating group has zero checked checkboxes. Also runs
/// once when a page is installed.
pub fn update_button_state(doc: &mut Document) {
    let gated: Vec<NodeId> = doc
        .all_elements()
        .into_iter()
        .filter(|&id| doc.element(id).attr(BUTTON_ENABLE_ATTR).is_some())
        .collect();

    for button in gated {
        let Some(selector) = doc
            .element(button)
            .attr(CHECKBOX_GROUP_ATTR)
            .map(str::to_string)
        else {
            continue;
        };
        let list = match SelectorList::parse(&selector) {
            Ok(list) => list,
            Err(err) => {
                debug!("ignoring checkbox-group selector {selector:?}: {err}");
                continue;
            }
        };
        let checked_count = doc
            .query_all(&list)
            .into_iter()
            .filter(|&id| doc.element(id).checked)
            .count();
        doc.element_mut(button).disabled = checked_count == 0;
    }
}

/// Whether the checkbox is matched by any declared gating-group selector.
pub fn in_declared_group(doc: &Document, id: NodeId) -> bool {
    doc.all_elements().into_iter().any(|owner| {
        doc.element(owner)
            .attr(CHECKBOX_GROUP_ATTR)
            .and_then(|s| SelectorList::parse(s).ok())
            .is_some_and(|list| list.matches(doc.element(id)))
    })
}
