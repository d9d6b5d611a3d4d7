//! Tools shipped with the toolbox

use crate::types::{Icon, Tool, ToolKind};

pub const AD_GENERATOR_ID: &str = "ad-generator";
pub const TYPOGRAPHY_RENDERER_ID: &str = "typography-renderer";

/// Built-in tools, in the order they are registered at startup
pub fn builtin_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            AD_GENERATOR_ID,
            "Personalized Ad Generator",
            "Generate high-converting ad copy and visuals for your products.",
            Icon::Megaphone,
            "image",
            ToolKind::AdGenerator,
        ),
        Tool::new(
            TYPOGRAPHY_RENDERER_ID,
            "Typography Renderer",
            "Render words as photorealistic 3D lettering built from any material.",
            Icon::Type,
            "image",
            ToolKind::TypographyRenderer,
        ),
    ]
}
