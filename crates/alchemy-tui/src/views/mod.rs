//! Mounted tool bodies
//!
//! Each view owns its tool's state machine for as long as it is mounted;
//! dropping the view discards that state.

pub mod ad;
pub mod typography;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use ad::AdView;
pub use typography::TypographyView;

/// What a key press asks the shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    None,
    Generate,
    Download,
    Back,
}

pub(crate) const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub(crate) fn spinner(tick: usize) -> char {
    SPINNER[tick % SPINNER.len()]
}

/// Shared navigation for a form of `field_count` fields plus a submit button
///
/// Returns `Some(action)` when the key was navigation, leaving field edits to
/// the caller.
pub(crate) fn navigate(focused: &mut usize, field_count: usize, key: KeyEvent) -> Option<ToolAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(ToolAction::Back),
        KeyCode::Char('g') if ctrl => Some(ToolAction::Generate),
        KeyCode::Up | KeyCode::BackTab => {
            *focused = focused.checked_sub(1).unwrap_or(field_count);
            Some(ToolAction::None)
        }
        KeyCode::Down => {
            *focused = (*focused + 1) % (field_count + 1);
            Some(ToolAction::None)
        }
        KeyCode::Enter if *focused == field_count => Some(ToolAction::Generate),
        KeyCode::Enter => {
            *focused += 1;
            Some(ToolAction::None)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_wraps_through_button() {
        let mut focused = 0;
        assert_eq!(navigate(&mut focused, 2, key(KeyCode::Up)), Some(ToolAction::None));
        assert_eq!(focused, 2, "wraps to the button");
        navigate(&mut focused, 2, key(KeyCode::Down));
        assert_eq!(focused, 0);
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let mut focused = 1;
        assert_eq!(navigate(&mut focused, 2, key(KeyCode::Enter)), Some(ToolAction::None));
        assert_eq!(focused, 2);
        assert_eq!(navigate(&mut focused, 2, key(KeyCode::Enter)), Some(ToolAction::Generate));
    }

    #[test]
    fn test_shortcuts() {
        let mut focused = 0;
        let ctrl_g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert_eq!(navigate(&mut focused, 3, ctrl_g), Some(ToolAction::Generate));
        assert_eq!(navigate(&mut focused, 3, key(KeyCode::Esc)), Some(ToolAction::Back));
        assert_eq!(navigate(&mut focused, 3, key(KeyCode::Char('x'))), None);
    }
}
