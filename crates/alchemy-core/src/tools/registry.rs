//! Tool registry
//!
//! Insertion-ordered, append-only list of tool descriptors. One registry is
//! built at startup and handed to whatever needs to look tools up.

use crate::logging::SharedLogger;
use crate::types::Tool;

use super::builtin::builtin_tools;

/// Registry of every tool the toolbox offers
pub struct ToolRegistry {
    tools: Vec<Tool>,
    logger: SharedLogger,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new(logger: SharedLogger) -> Self {
        Self {
            tools: Vec::new(),
            logger,
        }
    }

    /// Create a registry pre-populated with the built-in tools
    pub fn with_builtin_tools(logger: SharedLogger) -> Self {
        let mut registry = Self::new(logger);
        for tool in builtin_tools() {
            registry.register(tool);
        }
        registry
    }

    /// Register a tool
    ///
    /// A tool whose id is already registered is ignored and the existing entry
    /// is kept as-is. Returns whether the tool was inserted.
    pub fn register(&mut self, tool: Tool) -> bool {
        if self.tools.iter().any(|t| t.id == tool.id) {
            self.logger.debug(&format!(
                "[ToolRegistry] Ignoring duplicate registration of '{}'",
                tool.id
            ));
            return false;
        }

        self.logger.info(&format!(
            "[ToolRegistry] Registered '{}' under category '{}'",
            tool.id, tool.category_id
        ));
        self.tools.push(tool);
        true
    }

    /// Tools belonging to a category, in registration order
    pub fn by_category(&self, category_id: &str) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect()
    }

    /// Look a tool up by id
    pub fn by_id(&self, tool_id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == tool_id)
    }

    /// Every registered tool, in registration order
    pub fn all(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools)
            .finish_non_exhaustive()
    }
}
