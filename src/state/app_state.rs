//! Application state definitions

use crate::page::{Document, Element, NodeId};
use std::collections::VecDeque;

/// UI-local state: the installed page and everything around it
#[derive(Debug, Default)]
pub struct AppState {
    /// Name of the installed page
    pub page_name: String,
    /// Title of the installed page
    pub page_title: String,
    /// The instantiated element tree
    pub document: Document,
    /// Focused element, if any
    pub focus: Option<NodeId>,
    /// Transient status-bar message
    pub status_message: Option<String>,
    /// Pending error messages, shown one at a time
    errors: VecDeque<String>,
}

impl AppState {
    /// Install a freshly instantiated page, resetting focus and status
    pub fn install_page(&mut self, name: impl Into<String>, title: impl Into<String>, document: Document) {
        self.page_name = name.into();
        self.page_title = title.into();
        self.document = document;
        self.status_message = None;
        self.focus = self.focus_order().first().copied();
    }

    /// Interactive, non-disabled elements in document order
    pub fn focus_order(&self) -> Vec<NodeId> {
        self.document
            .all_elements()
            .into_iter()
            .filter(|&id| {
                let el = self.document.element(id);
                el.is_interactive() && !el.is_disabled()
            })
            .collect()
    }

    /// Move focus to the next interactive element (wraps around)
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        if order.is_empty() {
            self.focus = None;
            return;
        }
        let next = match self.focus.and_then(|f| order.iter().position(|&id| id == f)) {
            Some(pos) => order[(pos + 1) % order.len()],
            None => order[0],
        };
        self.focus = Some(next);
    }

    /// Move focus to the previous interactive element (wraps around)
    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        if order.is_empty() {
            self.focus = None;
            return;
        }
        let prev = match self.focus.and_then(|f| order.iter().position(|&id| id == f)) {
            Some(0) | None => order[order.len() - 1],
            Some(pos) => order[pos - 1],
        };
        self.focus = Some(prev);
    }

    /// The focused element, if focus is set
    pub fn focused_element(&self) -> Option<&Element> {
        self.focus.map(|id| self.document.element(id))
    }

    /// Whether focus is currently editing text (the Backspace exemption)
    pub fn is_editable_focus(&self) -> bool {
        self.focused_element().is_some_and(Element::is_editable)
    }

    /// Queue an error message for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Whether any error is pending
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }
}
