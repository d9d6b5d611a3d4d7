//! No-op logger implementation

use super::traits::Logger;

/// A logger that discards everything
///
/// Tests hand this to registries, stores and generators.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }

    /// Shared handle, the shape every component constructor takes
    pub fn shared() -> super::SharedLogger {
        std::sync::Arc::new(Self)
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
