use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::errors::SessionStoreError;
use super::store::SessionStore;

/// Session store backed by a flat JSON object on disk.
///
/// Every read goes to the file, so a `spellwatch login` in one terminal is
/// seen by a dashboard running in another on its next request.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored map.
    ///
    /// Returns an empty map if the file doesn't exist or is corrupted (with error logged).
    fn load(&self) -> BTreeMap<String, String> {
        if !self.path.exists() {
            return BTreeMap::new();
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!(
                        event = "core.session.json_parse_failed",
                        path = %self.path.display(),
                        error = %e,
                        "Session file exists but contains invalid JSON - treating as signed out"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) => {
                tracing::error!(
                    event = "core.session.load_failed",
                    path = %self.path.display(),
                    error = %e
                );
                BTreeMap::new()
            }
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SessionStoreError::WriteFailed {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let json =
            serde_json::to_string_pretty(items).map_err(|e| SessionStoreError::WriteFailed {
                path: self.path.display().to_string(),
                message: format!("Failed to serialize session: {}", e),
            })?;

        std::fs::write(&self.path, json).map_err(|e| SessionStoreError::WriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            event = "core.session.saved",
            path = %self.path.display(),
            keys = items.len()
        );

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut items = self.load();
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(event = "core.session.cleared", path = %self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::WriteFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }
}
