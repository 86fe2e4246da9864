use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::{file_storage::FileStorage, memory_storage::MemoryStorage};
use crate::config::{StorageBackend, StorageConfig};

/// The Storage trait abstracts the local key-value facility the session
/// layer writes through (get, set, remove by key).
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    async fn set(&self, key: &str, value: &str) -> Result<(), String>;
    async fn remove(&self, key: &str) -> Result<(), String>;
    fn is_persistent(&self) -> bool {
        // Default implementation should return always True for durable backends
        // The in-memory backend will return false so we can write better debug
        // messages when a session does not survive a restart
        true
    }
}

/// Creates a concrete storage implementation based on the StorageConfig.
/// If `storage.enabled = false`, returns the volatile in-memory backend.
/// Otherwise, picks the specified backend.
pub async fn create_storage(config: &StorageConfig) -> Arc<dyn Storage> {
    if !config.enabled {
        info!("Session storage is disabled. Using in-memory storage.");
        return Arc::new(MemoryStorage::new());
    }

    match &config.backend {
        Some(StorageBackend::File(file_config)) => match FileStorage::new(file_config).await {
            Ok(storage) => {
                info!("Successfully created file storage.");
                Arc::new(storage)
            }
            Err(e) => {
                error!("Failed to create file storage: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            error!("Storage is enabled, but no backend config is provided!");
            std::process::exit(1);
        }
    }
}
