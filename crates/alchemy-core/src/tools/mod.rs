//! Tool registry and the built-in tool catalogue
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  ToolRegistry                │  built once at startup,
//! │  [ad-generator, typography…] │  read by the shell
//! └──────────────────────────────┘
//!        │ by_category / by_id
//!        ▼
//!   Canvas view resolution (categories::resolve_view)
//! ```

mod builtin;
mod registry;

pub use builtin::{builtin_tools, AD_GENERATOR_ID, TYPOGRAPHY_RENDERER_ID};
pub use registry::ToolRegistry;
