//! Colors used across the shell

use ratatui::style::{Color, Modifier, Style};

/// Color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub text_muted: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(11, 15, 25),
            surface: Color::Rgb(30, 41, 59),
            primary: Color::Rgb(139, 92, 246),
            accent: Color::Rgb(34, 211, 238),
            text: Color::Rgb(226, 232, 240),
            text_muted: Color::Rgb(100, 116, 139),
            error: Color::Rgb(239, 68, 68),
            success: Color::Rgb(34, 197, 94),
        }
    }
}

impl Theme {
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Border style, highlighted when the panel has focus
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.surface)
        }
    }
}
