//! Typography renderer body

use alchemy_core::types::{ASPECT_RATIOS, FONT_STYLES, IMAGE_SIZES, MAX_TEXT_LEN, THINKING_LEVELS};
use alchemy_core::{
    AppConfig, ImageRef, RenderPhase, SharedLogger, TypographyInput, TypographyRenderer,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{navigate, spinner, ToolAction};
use crate::forms::{self, FieldKind, FieldRow};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypographyField {
    Text,
    FontStyle,
    Material,
    Background,
    AspectRatio,
    ImageSize,
    ThinkingLevel,
    ApiKey,
}

impl TypographyField {
    const ALL: [TypographyField; 8] = [
        TypographyField::Text,
        TypographyField::FontStyle,
        TypographyField::Material,
        TypographyField::Background,
        TypographyField::AspectRatio,
        TypographyField::ImageSize,
        TypographyField::ThinkingLevel,
        TypographyField::ApiKey,
    ];

    fn label(self) -> &'static str {
        match self {
            TypographyField::Text => "Text to Render",
            TypographyField::FontStyle => "Font Style",
            TypographyField::Material => "Material",
            TypographyField::Background => "Background (Optional)",
            TypographyField::AspectRatio => "Aspect Ratio",
            TypographyField::ImageSize => "Resolution",
            TypographyField::ThinkingLevel => "Thinking Level",
            TypographyField::ApiKey => "Gemini API Key (Optional for Mock)",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            TypographyField::Text => "e.g., HELLO",
            TypographyField::Material => "e.g., Gold, Bananas, Ice, Fire",
            TypographyField::Background => "e.g., Dark galaxy, White studio",
            TypographyField::ApiKey => "Enter API Key",
            _ => "",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            TypographyField::Text => FieldKind::Text {
                max_len: Some(MAX_TEXT_LEN),
                masked: false,
            },
            TypographyField::ApiKey => FieldKind::Text {
                max_len: None,
                masked: true,
            },
            TypographyField::Material | TypographyField::Background => FieldKind::text(),
            TypographyField::FontStyle => FieldKind::Choice(FONT_STYLES),
            TypographyField::AspectRatio => FieldKind::Choice(ASPECT_RATIOS),
            TypographyField::ImageSize => FieldKind::Choice(IMAGE_SIZES),
            TypographyField::ThinkingLevel => FieldKind::Choice(THINKING_LEVELS),
        }
    }

    fn value(self, input: &TypographyInput) -> &str {
        match self {
            TypographyField::Text => &input.text,
            TypographyField::FontStyle => &input.font_style,
            TypographyField::Material => &input.material,
            TypographyField::Background => &input.background,
            TypographyField::AspectRatio => &input.aspect_ratio,
            TypographyField::ImageSize => &input.image_size,
            TypographyField::ThinkingLevel => &input.thinking_level,
            TypographyField::ApiKey => &input.api_key,
        }
    }

    fn value_mut(self, input: &mut TypographyInput) -> &mut String {
        match self {
            TypographyField::Text => &mut input.text,
            TypographyField::FontStyle => &mut input.font_style,
            TypographyField::Material => &mut input.material,
            TypographyField::Background => &mut input.background,
            TypographyField::AspectRatio => &mut input.aspect_ratio,
            TypographyField::ImageSize => &mut input.image_size,
            TypographyField::ThinkingLevel => &mut input.thinking_level,
            TypographyField::ApiKey => &mut input.api_key,
        }
    }
}

pub struct TypographyView {
    renderer: TypographyRenderer,
    focused: usize,
}

impl TypographyView {
    /// `api_key` pre-fills the key field; `None` leaves it empty (simulated)
    pub fn new(config: &AppConfig, api_key: Option<String>, logger: SharedLogger) -> Self {
        let mut renderer = TypographyRenderer::new(config.clone(), logger);
        if let Some(key) = api_key {
            renderer.input_mut().api_key = key;
        }
        Self { renderer, focused: 0 }
    }

    pub fn renderer(&self) -> &TypographyRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TypographyRenderer {
        &mut self.renderer
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ToolAction {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return if self.renderer.result().is_some() {
                ToolAction::Download
            } else {
                ToolAction::None
            };
        }
        if let Some(action) = navigate(&mut self.focused, TypographyField::ALL.len(), key) {
            return action;
        }
        if let Some(field) = TypographyField::ALL.get(self.focused) {
            forms::apply_key(field.kind(), field.value_mut(self.renderer.input_mut()), key);
        }
        ToolAction::None
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, tick: usize) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let input = self.renderer.input();
        let rows: Vec<FieldRow<'_>> = TypographyField::ALL
            .iter()
            .map(|field| FieldRow {
                label: field.label(),
                kind: field.kind(),
                value: field.value(input),
                placeholder: field.placeholder(),
            })
            .collect();
        let button = if self.renderer.is_generating() {
            format!("{} Rendering...", spinner(tick))
        } else {
            "Render Typography".to_string()
        };
        forms::render_form(
            f,
            chunks[0],
            theme,
            &rows,
            self.focused,
            (&button, self.renderer.can_generate()),
        );

        let lines: Vec<Line<'_>> = match self.renderer.phase() {
            RenderPhase::Idle => vec![Line::from(Span::styled(
                "Fill out the form to generate custom typography",
                theme.muted(),
            ))],
            RenderPhase::Generating => vec![
                Line::from(Span::styled(
                    format!("{} Sculpting your text...", spinner(tick)),
                    Style::default().fg(theme.accent),
                )),
                Line::from(Span::styled("Applying materials and lighting...", theme.muted())),
            ],
            RenderPhase::Failed(message) => vec![Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(theme.error),
            ))],
            RenderPhase::Ready(output) => {
                let image = match ImageRef::parse(&output.image_url) {
                    Ok(ImageRef::Inline { mime_type, data }) => {
                        format!("inline {} ({} base64 chars)", mime_type, data.len())
                    }
                    _ => output.image_url.clone(),
                };
                vec![
                    Line::from(Span::styled(
                        "Image ready",
                        Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(image),
                    Line::default(),
                    Line::from(Span::styled("Prompt used", theme.title())),
                    Line::from(output.prompt_used.clone()),
                    Line::default(),
                    Line::from(Span::styled(
                        format!("Ctrl+S  download as {}", input.download_file_name()),
                        theme.muted(),
                    )),
                ]
            }
        };

        let results = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(theme.border(false)),
        );
        f.render_widget(results, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemy_core::NoOpLogger;

    fn press(view: &mut TypographyView, code: KeyCode) -> ToolAction {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_prefilled_api_key() {
        let view = TypographyView::new(
            &AppConfig::default(),
            Some("secret".to_string()),
            NoOpLogger::shared(),
        );
        assert_eq!(view.renderer().input().api_key, "secret");

        let view = TypographyView::new(&AppConfig::default(), None, NoOpLogger::shared());
        assert!(!view.renderer().input().has_api_key());
    }

    #[test]
    fn test_text_is_capped() {
        let mut view = TypographyView::new(&AppConfig::default(), None, NoOpLogger::shared());
        for _ in 0..(MAX_TEXT_LEN + 10) {
            press(&mut view, KeyCode::Char('A'));
        }
        assert_eq!(view.renderer().input().text.chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_choice_fields_cycle() {
        let mut view = TypographyView::new(&AppConfig::default(), None, NoOpLogger::shared());
        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Right);
        assert_eq!(view.renderer().input().font_style, "Cursive");

        // Typing into a choice field is ignored
        press(&mut view, KeyCode::Char('x'));
        assert_eq!(view.renderer().input().font_style, "Cursive");
    }

    #[test]
    fn test_download_needs_a_result() {
        let mut view = TypographyView::new(&AppConfig::default(), None, NoOpLogger::shared());
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(view.handle_key(ctrl_s), ToolAction::None);
    }
}
