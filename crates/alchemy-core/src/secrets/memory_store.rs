//! In-memory secret store

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// In-memory secret store; contents vanish with the value
///
/// # Example
///
/// ```
/// use alchemy_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.store("gemini", "test-key").unwrap();
/// assert_eq!(store.get("gemini"), Some("test-key".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut secrets) = store.secrets.write() {
            secrets.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets.read().ok()?.get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        let mut secrets = self
            .secrets
            .write()
            .map_err(|_| SecretStoreError::Other("secret map poisoned".to_string()))?;
        secrets.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySecretStore::new();
        assert!(!store.has("gemini"));

        store.store("gemini", "k1").unwrap();
        store.store("gemini", "k2").unwrap();
        assert_eq!(store.get("gemini"), Some("k2".to_string()));
    }

    #[test]
    fn test_with_secret() {
        let store = MemorySecretStore::with_secret("gemini", "seed");
        assert_eq!(store.name(), "memory");
        assert!(store.has("gemini"));
        assert!(!store.has("google"));
    }
}
