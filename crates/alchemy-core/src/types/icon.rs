//! Symbolic icon references

use serde::{Deserialize, Serialize};

/// Icon attached to a category or tool
///
/// The core only names the icon; the presentation layer decides how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    FileText,
    Image,
    Database,
    Mic,
    Megaphone,
    Type,
}

impl Icon {
    /// Stable tag, e.g. for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::FileText => "file-text",
            Icon::Image => "image",
            Icon::Database => "database",
            Icon::Mic => "mic",
            Icon::Megaphone => "megaphone",
            Icon::Type => "type",
        }
    }
}
