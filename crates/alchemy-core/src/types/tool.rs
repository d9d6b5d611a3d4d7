//! Tool descriptors

use serde::{Deserialize, Serialize};

use super::Icon;

/// Which body the shell mounts when a tool is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    AdGenerator,
    TypographyRenderer,
}

/// A self-contained feature unit registered under one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique identifier
    pub id: String,
    pub name: String,
    /// One-line pitch shown on the tool card
    pub description: String,
    pub icon: Icon,
    /// Owning category id
    pub category_id: String,
    pub kind: ToolKind,
}

impl Tool {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: Icon,
        category_id: impl Into<String>,
        kind: ToolKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon,
            category_id: category_id.into(),
            kind,
        }
    }
}
