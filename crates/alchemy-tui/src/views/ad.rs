//! Personalized ad generator body

use alchemy_core::{AdGenerator, AdInput, AdPhase, AppConfig, SharedLogger};
use crossterm::event::KeyEvent;
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
enum AdField {
    ProductName,
    Description,
    TargetAudience,
}

impl AdField {
    const ALL: [AdField; 3] = [AdField::ProductName, AdField::Description, AdField::TargetAudience];

    fn label(self) -> &'static str {
        match self {
            AdField::ProductName => "Product Name",
            AdField::Description => "Description",
            AdField::TargetAudience => "Target Audience",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            AdField::ProductName => "e.g., Quantum Sneakers",
            AdField::Description => "Describe your product's key features...",
            AdField::TargetAudience => "e.g., Urban runners, Tech enthusiasts",
        }
    }

    fn value(self, input: &AdInput) -> &str {
        match self {
            AdField::ProductName => &input.product_name,
            AdField::Description => &input.description,
            AdField::TargetAudience => &input.target_audience,
        }
    }

    fn value_mut(self, input: &mut AdInput) -> &mut String {
        match self {
            AdField::ProductName => &mut input.product_name,
            AdField::Description => &mut input.description,
            AdField::TargetAudience => &mut input.target_audience,
        }
    }
}

pub struct AdView {
    generator: AdGenerator,
    focused: usize,
}

impl AdView {
    pub fn new(config: &AppConfig, logger: SharedLogger) -> Self {
        Self {
            generator: AdGenerator::new(config.simulation.delay(), logger),
            focused: 0,
        }
    }

    pub fn generator(&self) -> &AdGenerator {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut AdGenerator {
        &mut self.generator
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ToolAction {
        if let Some(action) = navigate(&mut self.focused, AdField::ALL.len(), key) {
            return action;
        }
        if let Some(field) = AdField::ALL.get(self.focused) {
            forms::apply_key(FieldKind::text(), field.value_mut(self.generator.input_mut()), key);
        }
        ToolAction::None
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, tick: usize) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let input = self.generator.input();
        let rows: Vec<FieldRow<'_>> = AdField::ALL
            .iter()
            .map(|field| FieldRow {
                label: field.label(),
                kind: FieldKind::text(),
                value: field.value(input),
                placeholder: field.placeholder(),
            })
            .collect();
        let button = if self.generator.is_generating() {
            format!("{} Generating...", spinner(tick))
        } else {
            "Generate Ads".to_string()
        };
        forms::render_form(
            f,
            chunks[0],
            theme,
            &rows,
            self.focused,
            (&button, self.generator.can_generate()),
        );

        let lines: Vec<Line<'_>> = match self.generator.phase() {
            AdPhase::Idle => vec![Line::from(Span::styled(
                "Fill out the form to generate ad variants",
                theme.muted(),
            ))],
            AdPhase::Generating => vec![Line::from(Span::styled(
                format!("{} Crafting your ads...", spinner(tick)),
                Style::default().fg(theme.accent),
            ))],
            AdPhase::Ready(ads) => {
                let mut lines = Vec::new();
                for ad in ads {
                    lines.push(Line::from(Span::styled(
                        ad.headline.clone(),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(ad.body_copy.clone()));
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!(" {} ", ad.cta),
                            Style::default().fg(theme.background).bg(theme.accent),
                        ),
                        Span::raw("  "),
                        Span::styled(ad.image_url.clone(), theme.muted()),
                    ]));
                    lines.push(Line::default());
                }
                lines
            }
        };

        let results = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_style(theme.border(false)),
        );
        f.render_widget(results, chunks[1]);
    }
}
