//! Alchemy Core
//!
//! Everything behind the Alchemy AI toolbox that is not drawing: the tool
//! registry, categories and selection, the built-in tools' generation logic,
//! and the ambient pieces they share (config, secrets, logging).
//!
//! ## Control flow
//!
//! The shell reads the `CategoryStore`, resolves a `CanvasView` against the
//! `ToolRegistry`, and mounts a tool body (`AdGenerator` or
//! `TypographyRenderer`) when a tool is opened. Each mounted tool runs its own
//! request/response cycle.
//!
//! ```rust,ignore
//! use alchemy_core::{CategoryStore, ToolRegistry, resolve_view, CanvasView};
//!
//! let registry = ToolRegistry::with_builtin_tools(logger.clone());
//! let mut store = CategoryStore::new(logger);
//!
//! store.select_category("image");
//! store.select_tool(Some("typography-renderer".to_string()));
//! assert!(matches!(resolve_view(&store, &registry), CanvasView::ActiveTool(_)));
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod secrets;
pub mod tools;
pub mod categories;
pub mod generators;
pub mod images;

// Re-export commonly used types
pub use types::{
    AdInput, AdOutput, CancellationToken, Category, Icon, Tool, ToolKind, TypographyInput,
    TypographyOutput,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, FileLogger};

pub use config::{AppConfig, ConfigProvider, FileConfigProvider, MemoryConfigProvider};

pub use secrets::{SecretStore, EnvSecretStore, MemorySecretStore};

pub use tools::ToolRegistry;

pub use categories::{resolve_view, CanvasView, CategoryError, CategoryStore, Selection};

pub use generators::{
    AdGenerator, AdPhase, GenerationError, GenerationResult, ImageService, RenderPhase,
    TypographyRenderer,
};

pub use images::{save_image, ImageRef};
