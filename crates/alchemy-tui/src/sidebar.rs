//! Category list with the "create new category" entry

use alchemy_core::Category;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::icons;
use crate::theme::Theme;

pub const NEW_CATEGORY_NAME: &str = "New Category";

/// Label of the trailing action row
pub const CREATE_LABEL: &str = "Create new category";

/// Rows shown: every category, then the create action
pub fn row_count(categories: &[Category]) -> usize {
    categories.len() + 1
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    categories: &[Category],
    active_category: Option<&str>,
    cursor: usize,
    focused: bool,
) {
    let mut items: Vec<ListItem<'_>> = categories
        .iter()
        .map(|category| {
            let active = active_category == Some(category.id.as_str());
            let style = if active {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", icons::glyph(category.icon))),
                Span::styled(category.name.clone(), style),
            ]))
        })
        .collect();
    items.push(ListItem::new(Line::from(Span::styled(
        format!(" +  {}", CREATE_LABEL),
        Style::default().fg(theme.primary),
    ))));

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Alchemy ", theme.title()))
                .borders(Borders::ALL)
                .border_style(theme.border(focused)),
        )
        .highlight_style(Style::default().bg(theme.surface))
        .highlight_symbol("▌");

    let mut state = ListState::default();
    state.select(Some(cursor.min(categories.len())));
    f.render_stateful_widget(list, area, &mut state);
}
