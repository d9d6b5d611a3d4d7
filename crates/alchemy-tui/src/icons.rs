//! Glyphs for symbolic icons

use alchemy_core::Icon;

/// Terminal glyph for an icon
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::FileText => "📄",
        Icon::Image => "🖼",
        Icon::Database => "🗄",
        Icon::Mic => "🎤",
        Icon::Megaphone => "📣",
        Icon::Type => "🔤",
    }
}
