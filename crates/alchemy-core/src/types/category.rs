//! Category type

use serde::{Deserialize, Serialize};

use super::Icon;

/// A user-facing grouping of tools, selectable from the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (e.g. "image")
    pub id: String,
    /// Display name (e.g. "Image Generation")
    pub name: String,
    pub icon: Icon,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon,
        }
    }
}

/// Derive a category id from a display name
///
/// Lowercases the name and collapses every run of whitespace into one hyphen,
/// so "New  Category" becomes "new-category".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}
