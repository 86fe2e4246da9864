use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::storage::Storage;

/// The config struct for file-backed session storage.
/// Contains the path of the JSON file holding the key-value entries.
#[derive(Deserialize, Serialize, JsonSchema, Debug)]
pub struct FileStorageConfig {
    pub path: PathBuf,
}

/// A concrete `Storage` implementation backed by a single JSON object file.
///
/// The file maps keys to string values and is rewritten whole on every
/// mutation, so a value is durable by the time a `set` or `remove` returns.
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Creates a new `FileStorage` from the given config, loading any
    /// entries a previous run left behind.
    pub async fn new(config: &FileStorageConfig) -> Result<Self, String> {
        info!("Opening session storage file at: {}", config.path.display());

        let entries = match fs::read_to_string(&config.path).await {
            Ok(contents) => serde_json::from_str::<HashMap<String, String>>(&contents)
                .map_err(|e| format!("Failed to parse storage file: {}", e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No storage file found, starting with an empty session.");
                HashMap::new()
            }
            Err(e) => return Err(format!("Failed to read storage file: {}", e)),
        };

        Ok(Self {
            path: config.path.clone(),
            entries: RwLock::new(entries),
        })
    }

    /// Serialize the current entries and rewrite the storage file.
    /// The parent directory is created on first use.
    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| format!("Failed to create storage directory: {}", e))?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("Failed to serialize storage entries: {}", e))?;

        fs::write(&self.path, contents)
            .await
            .map_err(|e| format!("Failed to write storage file: {}", e))
    }
}

#[async_trait]
impl Storage for FileStorage {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    /// Stores `value` under `key` and rewrites the file before returning.
    async fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await
    }

    /// Removes the entry under `key`. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.flush(&entries).await?;
        }
        Ok(())
    }
}
