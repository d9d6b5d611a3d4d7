//! API key lookup
//!
//! The shell uses a `SecretStore` to pre-fill the API key field of tools that
//! talk to the remote image service.

mod traits;
mod env_store;
mod memory_store;

pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
pub use env_store::EnvSecretStore;
pub use memory_store::MemorySecretStore;

/// Service name under which the image-generation API key is looked up
pub const IMAGE_SERVICE_SECRET: &str = "gemini";
