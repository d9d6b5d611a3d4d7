//! Keyboard-driven form fields
//!
//! Field values live in the core input structs; this module only knows how
//! to edit a `String` according to the field's kind and how to draw a form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, optionally length-capped and masked
    Text { max_len: Option<usize>, masked: bool },
    /// One of a fixed list, cycled with ←/→
    Choice(&'static [&'static str]),
}

impl FieldKind {
    pub const fn text() -> Self {
        FieldKind::Text { max_len: None, masked: false }
    }
}

/// Apply a key press to a field value. Returns true if the value changed.
pub fn apply_key(kind: FieldKind, value: &mut String, key: KeyEvent) -> bool {
    match kind {
        FieldKind::Text { max_len, .. } => match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if max_len.is_some_and(|max| value.chars().count() >= max) {
                    return false;
                }
                value.push(c);
                true
            }
            KeyCode::Backspace => value.pop().is_some(),
            _ => false,
        },
        FieldKind::Choice(options) => {
            let step: isize = match key.code {
                KeyCode::Right => 1,
                KeyCode::Left => -1,
                _ => return false,
            };
            if options.is_empty() {
                return false;
            }
            let current = options.iter().position(|o| *o == value.as_str());
            let len = options.len() as isize;
            let next = match current {
                Some(i) => (i as isize + step).rem_euclid(len),
                None => 0,
            };
            *value = options[next as usize].to_string();
            true
        }
    }
}

/// Text shown for a value of this kind
pub fn display_value(kind: FieldKind, value: &str) -> String {
    match kind {
        FieldKind::Text { masked: true, .. } => "•".repeat(value.chars().count()),
        FieldKind::Choice(_) => format!("◂ {} ▸", value),
        FieldKind::Text { .. } => value.to_string(),
    }
}

/// One row of a rendered form
pub struct FieldRow<'a> {
    pub label: &'a str,
    pub kind: FieldKind,
    pub value: &'a str,
    pub placeholder: &'a str,
}

/// Render a vertical form with a submit button under it
///
/// `focused` indexes `rows`; `rows.len()` means the button.
pub fn render_form(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    rows: &[FieldRow<'_>],
    focused: usize,
    button: (&str, bool),
) {
    let mut constraints: Vec<Constraint> = rows.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, row) in rows.iter().enumerate() {
        let is_focused = i == focused;
        let content = if row.value.is_empty() {
            Span::styled(row.placeholder, theme.muted().add_modifier(Modifier::ITALIC))
        } else {
            Span::styled(display_value(row.kind, row.value), Style::default().fg(theme.text))
        };
        let mut spans = vec![content];
        if is_focused && matches!(row.kind, FieldKind::Text { .. }) {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }

        let field = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(format!(" {} ", row.label))
                .borders(Borders::ALL)
                .border_style(theme.border(is_focused)),
        );
        f.render_widget(field, chunks[i]);
    }

    let (label, enabled) = button;
    let button_focused = focused == rows.len();
    let style = if enabled {
        Style::default().fg(theme.background).bg(theme.primary).add_modifier(Modifier::BOLD)
    } else {
        theme.muted()
    };
    let button = Paragraph::new(Line::from(Span::styled(format!("  {}  ", label), style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(button_focused)),
    );
    f.render_widget(button, chunks[rows.len()]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_text_editing() {
        let mut value = String::new();
        assert!(apply_key(FieldKind::text(), &mut value, key(KeyCode::Char('h'))));
        assert!(apply_key(FieldKind::text(), &mut value, key(KeyCode::Char('i'))));
        assert_eq!(value, "hi");
        assert!(apply_key(FieldKind::text(), &mut value, key(KeyCode::Backspace)));
        assert_eq!(value, "h");
        assert!(!apply_key(FieldKind::text(), &mut value, key(KeyCode::Left)));
    }

    #[test]
    fn test_text_max_len() {
        let kind = FieldKind::Text { max_len: Some(2), masked: false };
        let mut value = "ab".to_string();
        assert!(!apply_key(kind, &mut value, key(KeyCode::Char('c'))));
        assert_eq!(value, "ab");
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut value = String::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!apply_key(FieldKind::text(), &mut value, ctrl_s));
        assert!(value.is_empty());
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        const OPTIONS: &[&str] = &["1:1", "16:9", "9:16"];
        let kind = FieldKind::Choice(OPTIONS);
        let mut value = "1:1".to_string();

        apply_key(kind, &mut value, key(KeyCode::Right));
        assert_eq!(value, "16:9");
        apply_key(kind, &mut value, key(KeyCode::Left));
        apply_key(kind, &mut value, key(KeyCode::Left));
        assert_eq!(value, "9:16");

        let mut unknown = "odd".to_string();
        apply_key(kind, &mut unknown, key(KeyCode::Right));
        assert_eq!(unknown, "1:1");
    }

    #[test]
    fn test_masked_display() {
        let kind = FieldKind::Text { max_len: None, masked: true };
        assert_eq!(display_value(kind, "abc"), "•••");
    }
}
