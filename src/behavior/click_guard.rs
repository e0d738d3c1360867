//! Click-time disable
//!
//! Non-submit actionables (plain buttons, links) are disabled the moment
//! they are activated, before their action runs, so a second activation
//! cannot start the same host-side action twice. Submit controls are
//! left to the double-submit guard.

use super::submit_guard::{self, OPT_OUT_CLASS};
use crate::page::{Document, Element, NodeId};
use tracing::debug;

/// Resolve the nearest actionable ancestor of an event target:
/// `button, input[type=submit], a`, the target itself included.
pub fn find_actionable(doc: &Document, target: NodeId) -> Option<NodeId> {
    doc.closest(target, Element::is_actionable)
}

/// Run the click guard for a resolved actionable. Returns true when the
/// element was disabled here; false when it is opted out or a submit
/// control owned by the double-submit guard.
pub fn on_click(doc: &mut Document, actionable: NodeId) -> bool {
    let el = doc.element(actionable);
    if el.has_class(OPT_OUT_CLASS) {
        return false;
    }
    if el.is_submit_control() {
        // The submit path disables the whole form on its deferred tick.
        return false;
    }
    debug!("click guard disabling element {actionable}");
    submit_guard::disable_element(doc, actionable);
    true
}
