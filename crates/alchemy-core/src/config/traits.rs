//! Configuration provider trait

use super::settings::AppConfig;

/// Source of the application configuration
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory for testing
/// - `FileConfigProvider`: YAML file (~/.config/alchemy/config.yaml)
pub trait ConfigProvider: Send + Sync {
    /// Current configuration
    fn load(&self) -> ConfigResult<AppConfig>;

    /// Persist a new configuration
    fn save(&self, config: &AppConfig) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
