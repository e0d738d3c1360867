//! Navigation-chord suppression
//!
//! Runs before any other key handling. Swallows reload and history
//! chords outright: F5, Ctrl+R, Ctrl/Alt+Left/Right, and Backspace when
//! focus is not editing text. Everything else passes through.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

/// Returns true when the key chord must be swallowed before any other
/// handler sees it. `editable_focus` reports whether the focused element
/// is a text input, textarea, or contenteditable region.
pub fn intercept(key: &KeyEvent, editable_focus: bool) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let suppressed = match key.code {
        KeyCode::F(5) => true,
        KeyCode::Char('r' | 'R') if ctrl => true,
        // Backspace keeps deleting characters while editing text
        KeyCode::Backspace => !editable_focus,
        KeyCode::Left | KeyCode::Right if ctrl || alt => true,
        _ => false,
    };
    if suppressed {
        trace!("suppressed key chord {:?} {:?}", key.modifiers, key.code);
    }
    suppressed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_f5_is_suppressed() {
        assert!(intercept(&key(KeyCode::F(5), KeyModifiers::NONE), false));
        assert!(intercept(&key(KeyCode::F(5), KeyModifiers::NONE), true));
    }

    #[test]
    fn test_other_function_keys_pass() {
        assert!(!intercept(&key(KeyCode::F(1), KeyModifiers::NONE), false));
    }

    #[test]
    fn test_ctrl_r_is_suppressed() {
        assert!(intercept(
            &key(KeyCode::Char('r'), KeyModifiers::CONTROL),
            false
        ));
        assert!(intercept(
            &key(KeyCode::Char('R'), KeyModifiers::CONTROL),
            false
        ));
    }

    #[test]
    fn test_plain_r_passes() {
        assert!(!intercept(&key(KeyCode::Char('r'), KeyModifiers::NONE), false));
    }

    #[test]
    fn test_backspace_suppressed_outside_editable_focus() {
        assert!(intercept(&key(KeyCode::Backspace, KeyModifiers::NONE), false));
    }

    #[test]
    fn test_backspace_passes_in_editable_focus() {
        assert!(!intercept(&key(KeyCode::Backspace, KeyModifiers::NONE), true));
    }

    #[test]
    fn test_ctrl_arrows_are_suppressed() {
        assert!(intercept(&key(KeyCode::Left, KeyModifiers::CONTROL), false));
        assert!(intercept(&key(KeyCode::Right, KeyModifiers::CONTROL), false));
    }

    #[test]
    fn test_alt_arrows_are_suppressed() {
        assert!(intercept(&key(KeyCode::Left, KeyModifiers::ALT), true));
        assert!(intercept(&key(KeyCode::Right, KeyModifiers::ALT), true));
    }

    #[test]
    fn test_plain_arrows_pass() {
        assert!(!intercept(&key(KeyCode::Left, KeyModifiers::NONE), false));
        assert!(!intercept(&key(KeyCode::Right, KeyModifiers::NONE), false));
        assert!(!intercept(&key(KeyCode::Up, KeyModifiers::NONE), false));
        assert!(!intercept(&key(KeyCode::Down, KeyModifiers::NONE), false));
    }

    #[test]
    fn test_up_down_with_modifiers_pass() {
        assert!(!intercept(&key(KeyCode::Up, KeyModifiers::CONTROL), false));
        assert!(!intercept(&key(KeyCode::Down, KeyModifiers::ALT), false));
    }
}
