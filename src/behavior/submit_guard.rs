//! Double-submit guard
//!
//! First submission of a form marks it with `data-submitting="true"` and
//! schedules a deferred pass that disables every submit-capable
//! descendant. The submission itself is never blocked; protection comes
//! from the controls being inert afterwards. The flag is cleared only by
//! re-instantiating the page.

use crate::page::{Document, InputType, NodeId, Tag};
use tracing::debug;

/// Marker class excluding an element from auto-disable
pub const OPT_OUT_CLASS: &str = "non_disabled";

/// Flag attribute set on a form once a submission starts
pub const SUBMITTING_ATTR: &str = "data-submitting";

/// Mark the form as submitting. Returns true when this was the first
/// submission and the deferred disable pass still needs to run.
pub fn arm(doc: &mut Document, form: NodeId) -> bool {
    if doc.element(form).attr(SUBMITTING_ATTR) == Some("true") {
        // Already in flight; let the event proceed untouched.
        return false;
    }
    doc.element_mut(form).set_attr(SUBMITTING_ATTR, "true");
    debug!("form {form} marked submitting");
    true
}

/// Deferred pass: disable every submit-capable descendant of the form
/// (`button`, `input[type=submit]`, `a`), honoring the opt-out class.
pub fn disable_submit_controls(doc: &mut Document, form: NodeId) {
    for id in doc.descendants(form) {
        let el = doc.element(id);
        let submit_capable = match el.tag {
            Tag::Button | Tag::Link => true,
            Tag::Input => el.input_type() == InputType::Submit,
            _ => false,
        };
        if submit_capable {
            disable_element(doc, id);
        }
    }
}

/// Disable a single element per the auto-disable rules.
///
/// Links: stash `href` into `data-href`, drop the href, add the
/// `disabled` class (rendered dimmed and skipped by hit-testing/focus).
/// Buttons and submit/button inputs: set the native disabled flag.
/// Elements carrying `non_disabled` are left alone.
pub fn disable_element(doc: &mut Document, id: NodeId) {
    let el = doc.element_mut(id);
    if el.has_class(OPT_OUT_CLASS) {
        return;
    }
    match el.tag {
        Tag::Link => {
            let href = el.href.take().unwrap_or_default();
            el.set_attr("data-href", href);
            el.add_class("disabled");
        }
        Tag::Button => {
            if matches!(el.button_type(), "submit" | "button") {
                el.disabled = true;
            }
        }
        Tag::Input => {
            if matches!(el.input_type(), InputType::Submit | InputType::Button) {
                el.disabled = true;
            }
        }
        _ => {}
    }
}
