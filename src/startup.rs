//! Application startup and session initialization.
//!
//! This module handles the one-time wiring of the session layer: creating
//! the storage backend and the shared default-header map, and restoring
//! any session a previous run persisted.

use std::sync::Arc;
use tracing::info;

use crate::config::ConfigV1;
use crate::http::HttpDefaults;
use crate::state::AppStore;
use crate::storage::create_storage;

/// Initializes the application store from the configuration.
///
/// Creates the storage backend and the default-header map, then reads the
/// token and user persisted by a previous run so requests made after a
/// restart keep their Authorization header. Must be called exactly once,
/// before the first view renders.
///
/// # Errors
///
/// Returns an error if the stored session cannot be read, or if the stored
/// user record no longer parses.
pub async fn init(config: &ConfigV1) -> Result<AppStore, String> {
    let storage = create_storage(&config.storage).await;
    if !storage.is_persistent() {
        info!("Sessions will not survive a restart.");
    }

    let http = Arc::new(HttpDefaults::new());

    let mut store = AppStore::new(storage, http);
    store.restore().await?;

    if store.token.is_empty() {
        info!("No stored session found, starting logged out.");
    } else {
        info!(
            "Restored session for user '{}'.",
            store.user.username.as_deref().unwrap_or("unknown")
        );
    }

    Ok(store)
}
