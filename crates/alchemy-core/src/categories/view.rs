//! Canvas view resolution

use crate::tools::ToolRegistry;
use crate::types::{Category, Tool};

use super::store::CategoryStore;

/// What the canvas shows for the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasView<'a> {
    /// Nothing selected: the empty dashboard
    Dashboard,
    /// A category is selected but no tool is open. `tools` may be empty,
    /// in which case the "no tools yet" message is shown.
    CategoryGrid {
        category_id: &'a str,
        category: Option<&'a Category>,
        tools: Vec<&'a Tool>,
    },
    /// A tool is open; the shell mounts its body
    ActiveTool(&'a Tool),
}

impl CanvasView<'_> {
    pub fn title(&self) -> &str {
        match self {
            CanvasView::ActiveTool(tool) => &tool.name,
            _ => "Alchemy AI Toolbox",
        }
    }
}

/// Resolve the canvas view from the selection
///
/// An active tool id that the registry does not know falls back to the
/// category grid (or the dashboard when no category is active).
pub fn resolve_view<'a>(store: &'a CategoryStore, registry: &'a ToolRegistry) -> CanvasView<'a> {
    if let Some(tool) = store.active_tool_id().and_then(|id| registry.by_id(id)) {
        return CanvasView::ActiveTool(tool);
    }

    match store.active_category_id() {
        Some(category_id) => CanvasView::CategoryGrid {
            category_id,
            category: store.get(category_id),
            tools: registry.by_category(category_id),
        },
        None => CanvasView::Dashboard,
    }
}
