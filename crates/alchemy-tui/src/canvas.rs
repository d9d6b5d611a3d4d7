//! Canvas: dashboard, category tool grid, or the mounted tool body

use alchemy_core::{CanvasView, Tool};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ToolView};
use crate::icons;
use crate::theme::Theme;

/// Tool cards per grid row
pub const GRID_COLUMNS: usize = 2;

pub fn render(f: &mut Frame, area: Rect, app: &App, view: &CanvasView<'_>, focused: bool) {
    let theme = app.theme();
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let mut header = Vec::new();
    if matches!(view, CanvasView::ActiveTool(_)) {
        header.push(Span::styled("← Back (Esc)  ", theme.muted()));
    }
    header.push(Span::styled(view.title().to_string(), theme.title()));
    f.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    match view {
        CanvasView::Dashboard => render_dashboard(f, chunks[1], theme),
        CanvasView::CategoryGrid { tools, .. } => {
            render_grid(f, chunks[1], theme, tools, app.grid_cursor(), focused)
        }
        CanvasView::ActiveTool(_) => match app.mounted_view() {
            Some(ToolView::Ad(body)) => body.render(f, chunks[1], theme, app.tick()),
            Some(ToolView::Typography(body)) => body.render(f, chunks[1], theme, app.tick()),
            None => {}
        },
    }
}

fn render_dashboard(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            " Alchemy AI Toolbox ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "No tools yet. Create categories and then add tools.",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled("[+]  press n to create a category", theme.muted())),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_grid(f: &mut Frame, area: Rect, theme: &Theme, tools: &[&Tool], cursor: usize, focused: bool) {
    if tools.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tools in this category yet.",
            theme.muted(),
        )))
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let rows = tools.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat(Constraint::Length(6))
                .take(rows)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (row, chunk) in tools.chunks(GRID_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_areas[row]);

        for (col, tool) in chunk.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let selected = focused && index == cursor;
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{}  {}", icons::glyph(tool.icon), tool.name),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(tool.description.clone(), theme.muted())),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border(selected)),
            );
            f.render_widget(card, cells[col]);
        }
    }
}
