//! Persisted user preferences.
//!
//! Each key is stored as a small JSON file under the preference directory. The only key
//! the app writes today is the dark-mode flag.

use std::fs;
use std::path::{Path, PathBuf};

/// Storage key of the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Failed to access preference storage at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preference '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceStore {
    root: PathBuf,
}

impl PreferenceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The platform data directory, falling back to a relative `cache/` directory.
    pub fn default_root() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join("mamas-kitchen").join("preferences");
        }
        PathBuf::from("cache").join("preferences")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }

    /// Reads a raw value; a key that was never written is `Ok(None)`.
    pub fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PreferenceError::Io { path, source }),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        fs::create_dir_all(&self.root).map_err(|source| PreferenceError::Io {
            path: self.root.clone(),
            source,
        })?;
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|source| PreferenceError::Io { path, source })
    }

    pub fn delete(&self, key: &str) -> Result<(), PreferenceError> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PreferenceError::Io { path, source }),
        }
    }

    pub fn dark_mode(&self) -> Result<Option<bool>, PreferenceError> {
        let Some(raw) = self.get(DARK_MODE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(raw.trim())
            .map(Some)
            .map_err(|source| PreferenceError::Json {
                key: DARK_MODE_KEY.to_string(),
                source,
            })
    }

    /// The saved flag, or `system_prefers_dark` when nothing usable is stored.
    pub fn load_dark_mode(&self, system_prefers_dark: bool) -> bool {
        match self.dark_mode() {
            Ok(Some(dark)) => dark,
            Ok(None) => system_prefers_dark,
            Err(err) => {
                tracing::warn!("ignoring saved theme preference: {}", err);
                system_prefers_dark
            }
        }
    }

    pub fn save_dark_mode(&self, dark: bool) -> Result<(), PreferenceError> {
        let encoded = serde_json::to_string(&dark).map_err(|source| PreferenceError::Json {
            key: DARK_MODE_KEY.to_string(),
            source,
        })?;
        self.set(DARK_MODE_KEY, &encoded)
    }
}

/// Sanitize storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}
