//! In-memory configuration provider

use std::sync::RwLock;

use super::settings::AppConfig;
use super::traits::{ConfigError, ConfigProvider, ConfigResult};

/// In-memory configuration provider for testing
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    config: RwLock<AppConfig>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn load(&self) -> ConfigResult<AppConfig> {
        self.config
            .read()
            .map(|c| c.clone())
            .map_err(|_| ConfigError::Other("config lock poisoned".to_string()))
    }

    fn save(&self, config: &AppConfig) -> ConfigResult<()> {
        let mut guard = self
            .config
            .write()
            .map_err(|_| ConfigError::Other("config lock poisoned".to_string()))?;
        *guard = config.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config_provider() {
        let provider = MemoryConfigProvider::new();
        assert_eq!(provider.load().unwrap(), AppConfig::default());

        let mut config = AppConfig::default();
        config.simulation.delay_ms = 0;
        provider.save(&config).unwrap();
        assert_eq!(provider.load().unwrap().simulation.delay_ms, 0);
    }
}
