//! Category store and selection controller

use thiserror::Error;

use crate::logging::SharedLogger;
use crate::tools::ToolRegistry;
use crate::types::{slugify, Category, Icon, Tool};

/// Icon given to categories created at runtime
pub const DEFAULT_CATEGORY_ICON: Icon = Icon::Database;

/// The seed categories present at startup
pub fn initial_categories() -> Vec<Category> {
    vec![
        Category::new("text", "Text Analysis", Icon::FileText),
        Category::new("image", "Image Generation", Icon::Image),
        Category::new("data", "Data Processing", Icon::Database),
        Category::new("voice", "Voice Synthesis", Icon::Mic),
    ]
}

/// Errors from category mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category name must not be empty")]
    EmptyName,

    #[error("A category with id '{0}' already exists")]
    DuplicateId(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

/// Current sidebar and canvas selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub active_category_id: Option<String>,
    pub active_tool_id: Option<String>,
}

/// Holds the category list and the UI selection
///
/// Changing the category always clears the selected tool, so a tool from
/// another category can never stay on screen.
pub struct CategoryStore {
    categories: Vec<Category>,
    selection: Selection,
    logger: SharedLogger,
}

impl CategoryStore {
    /// Store seeded with the initial categories and nothing selected
    pub fn new(logger: SharedLogger) -> Self {
        Self::with_categories(initial_categories(), logger)
    }

    pub fn with_categories(categories: Vec<Category>, logger: SharedLogger) -> Self {
        Self {
            categories,
            selection: Selection::default(),
            logger,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_category_id(&self) -> Option<&str> {
        self.selection.active_category_id.as_deref()
    }

    pub fn active_tool_id(&self) -> Option<&str> {
        self.selection.active_tool_id.as_deref()
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.active_category_id().and_then(|id| self.get(id))
    }

    /// Activate a category and clear the active tool
    pub fn select_category(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.logger.debug(&format!("[CategoryStore] Selecting category '{}'", id));
        self.selection.active_category_id = Some(id);
        self.selection.active_tool_id = None;
    }

    /// Return to the dashboard: no category, no tool
    pub fn clear_category(&mut self) {
        self.selection = Selection::default();
    }

    /// Set or clear the active tool; the category is left alone
    pub fn select_tool(&mut self, id: Option<String>) {
        self.logger.debug(&format!("[CategoryStore] Selecting tool {:?}", id));
        self.selection.active_tool_id = id;
    }

    /// Append a category named `name` with the default icon
    ///
    /// The id is derived from the name (see [`slugify`]). The new category is
    /// not activated.
    pub fn add_category(&mut self, name: &str) -> CategoryResult<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }

        let id = slugify(name);
        if self.get(&id).is_some() {
            self.logger.warn(&format!("[CategoryStore] Rejecting duplicate category id '{}'", id));
            return Err(CategoryError::DuplicateId(id));
        }

        self.logger.info(&format!("[CategoryStore] Added category '{}' ({})", name, id));
        self.categories.push(Category::new(id, name, DEFAULT_CATEGORY_ICON));
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// First name of the form `base`, `base 2`, `base 3`, ... whose id is free
    pub fn next_available_name(&self, base: &str) -> String {
        if self.get(&slugify(base)).is_none() {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{} {}", base, n))
            .find(|candidate| self.get(&slugify(candidate)).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    /// Tools of the active category; empty when no category is active
    pub fn active_tools<'r>(&self, registry: &'r ToolRegistry) -> Vec<&'r Tool> {
        match self.active_category_id() {
            Some(id) => registry.by_category(id),
            None => Vec::new(),
        }
    }
}
