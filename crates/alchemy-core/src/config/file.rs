//! File-based configuration provider (YAML)

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::settings::AppConfig;
use super::traits::{ConfigError, ConfigProvider, ConfigResult};

/// Reads and writes the configuration from a YAML file
///
/// A missing file is not an error: it yields the defaults.
///
/// # Example
///
/// ```no_run
/// use alchemy_core::config::{ConfigProvider, FileConfigProvider};
///
/// let config = FileConfigProvider::user().load().unwrap();
/// println!("simulated delay: {}ms", config.simulation.delay_ms);
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    cache: RwLock<Option<AppConfig>>,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// User-level config (~/.config/alchemy/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("alchemy").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_file(&self) -> ConfigResult<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    fn set_cache(&self, config: &AppConfig) -> ConfigResult<()> {
        let mut cache = self
            .cache
            .write()
            .map_err(|_| ConfigError::Other("config cache poisoned".to_string()))?;
        *cache = Some(config.clone());
        Ok(())
    }

    /// Re-read the file, dropping the cached copy
    pub fn reload(&self) -> ConfigResult<AppConfig> {
        let config = self.read_file()?;
        self.set_cache(&config)?;
        Ok(config)
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load(&self) -> ConfigResult<AppConfig> {
        if let Ok(cache) = self.cache.read() {
            if let Some(config) = cache.as_ref() {
                return Ok(config.clone());
            }
        }
        self.reload()
    }

    fn save(&self, config: &AppConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_yaml::to_string(config)?)?;
        self.set_cache(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));
        assert!(!provider.exists());
        assert_eq!(provider.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let provider = FileConfigProvider::new(&path);

        let mut config = AppConfig::default();
        config.image_service.request_timeout_secs = 30;
        config.downloads.directory = Some(dir.path().join("images"));
        provider.save(&config).unwrap();

        let fresh = FileConfigProvider::new(&path);
        assert_eq!(fresh.load().unwrap(), config);
    }

    #[test]
    fn test_reload_sees_external_edits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let provider = FileConfigProvider::new(&path);
        assert_eq!(provider.load().unwrap().simulation.delay_ms, 2000);

        fs::write(&path, "simulation:\n  delay_ms: 10\n").unwrap();
        assert_eq!(provider.load().unwrap().simulation.delay_ms, 2000, "cached");
        assert_eq!(provider.reload().unwrap().simulation.delay_ms, 10);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "simulation: [unclosed").unwrap();
        assert!(matches!(
            FileConfigProvider::new(&path).load(),
            Err(ConfigError::Yaml(_))
        ));
    }
}
