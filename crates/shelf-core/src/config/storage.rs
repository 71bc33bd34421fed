//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Blob storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored blobs. Created on first write if
    /// absent. Overridable via `SHELF_STORAGE__ROOT_PATH`.
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
        }
    }
}

fn default_root_path() -> String {
    "/tmp/files_manager".to_string()
}
