//! Global interaction-guard layer
//!
//! Every behavior here is a direct, one-shot event handler over the page
//! document: double-submit prevention, click-time disabling, navigation
//! chord suppression, context-menu suppression, and checkbox-group
//! widgets.

pub mod checkbox_group;
pub mod click_guard;
pub mod context_menu;
pub mod keyguard;
pub mod submit_guard;
