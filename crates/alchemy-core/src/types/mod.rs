//! Core data model
//!
//! Plain data shared by the registry, the category store, the tools and the shell.

mod icon;
mod category;
mod tool;
mod ad;
mod typography;
mod cancellation;

pub use icon::Icon;
pub use category::{Category, slugify};
pub use tool::{Tool, ToolKind};
pub use ad::{AdInput, AdOutput};
pub use typography::{
    TypographyInput, TypographyOutput, ASPECT_RATIOS, FONT_STYLES, IMAGE_SIZES, MAX_TEXT_LEN,
    THINKING_LEVELS,
};
pub use cancellation::CancellationToken;
