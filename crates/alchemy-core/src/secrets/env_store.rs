//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Service name to the environment variables checked for it, in order
static ENV_VAR_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    m.insert("gemini", &["GEMINI_API_KEY", "GOOGLE_API_KEY"]);
    m.insert("google", &["GEMINI_API_KEY", "GOOGLE_API_KEY"]);
    m
});

/// Read-only secret store backed by environment variables
///
/// `get("gemini")` checks `GEMINI_API_KEY` then `GOOGLE_API_KEY`; any other
/// key is looked up verbatim and then as `<KEY>_API_KEY`. Empty values count
/// as unset.
///
/// # Example
///
/// ```
/// use alchemy_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// let _key = store.get("gemini");
/// ```
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Environment variables consulted for a service name
    pub fn env_vars_for(service: &str) -> Option<&'static [&'static str]> {
        ENV_VAR_MAP.get(service.to_lowercase().as_str()).copied()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Some(vars) = Self::env_vars_for(key) {
            return vars.iter().find_map(|var| non_empty_var(var));
        }

        non_empty_var(key).or_else(|| non_empty_var(&format!("{}_API_KEY", key.to_uppercase())))
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_read_only() {
        let store = EnvSecretStore::new();
        assert_eq!(store.name(), "env");
        assert!(matches!(store.store("gemini", "value"), Err(SecretStoreError::ReadOnly)));
    }

    #[test]
    fn test_env_store_direct_and_suffixed() {
        env::set_var("ALCHEMY_TEST_SECRET_DIRECT", "direct");
        env::set_var("ALCHEMY_TEST_SUFFIX_API_KEY", "suffixed");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("ALCHEMY_TEST_SECRET_DIRECT"), Some("direct".to_string()));
        assert_eq!(store.get("alchemy_test_suffix"), Some("suffixed".to_string()));

        env::remove_var("ALCHEMY_TEST_SECRET_DIRECT");
        env::remove_var("ALCHEMY_TEST_SUFFIX_API_KEY");
    }

    #[test]
    fn test_env_store_empty_value_is_unset() {
        env::set_var("ALCHEMY_TEST_EMPTY_SECRET", "  ");
        let store = EnvSecretStore::new();
        assert!(!store.has("ALCHEMY_TEST_EMPTY_SECRET"));
        env::remove_var("ALCHEMY_TEST_EMPTY_SECRET");
    }

    #[test]
    fn test_service_mapping() {
        assert_eq!(
            EnvSecretStore::env_vars_for("Gemini"),
            Some(&["GEMINI_API_KEY", "GOOGLE_API_KEY"][..])
        );
        assert_eq!(EnvSecretStore::env_vars_for("openai"), None);
    }
}
