//! Configuration
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigProvider`: In-memory for testing
//! - `FileConfigProvider`: YAML file-based (~/.config/alchemy/config.yaml)

mod traits;
mod memory;
mod file;
mod settings;

pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use memory::MemoryConfigProvider;
pub use file::FileConfigProvider;
pub use settings::{
    AppConfig, DownloadSettings, ImageServiceSettings, SimulationSettings, DEFAULT_API_BASE,
    DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SIMULATED_DELAY_MS,
};
