//! Context-menu suppression
//!
//! Right-button mouse events are swallowed unconditionally, everywhere.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

/// Returns true when the mouse event is a right-button interaction to
/// swallow.
pub fn intercept(mouse: &MouseEvent) -> bool {
    let suppressed = matches!(
        mouse.kind,
        MouseEventKind::Down(MouseButton::Right)
            | MouseEventKind::Up(MouseButton::Right)
            | MouseEventKind::Drag(MouseButton::Right)
    );
    if suppressed {
        trace!("suppressed context menu at ({}, {})", mouse.column, mouse.row);
    }
    suppressed
}
