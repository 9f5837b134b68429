//! Durable key-value storage
//!
//! String values under fixed keys, the same model as browser local storage.
//! The file-backed store keeps one file per key and replaces it atomically,
//! so concurrent writers resolve as last-write-wins.

use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Failure to persist a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Io { path: String, reason: String },
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io { path, reason } => {
                write!(f, "failed to write {}: {}", path, reason)
            }
            StorageError::Serialize(reason) => write!(f, "failed to serialize value: {}", reason),
        }
    }
}

impl std::error::Error for StorageError {}

/// String-valued persistent storage
pub trait KeyValueStore: Send + Sync {
    /// Stored value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// One file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; anything path-like is flattened
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file))
    }

    fn io_error(path: &Path, err: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(&self.dir, e))?;

        let path = self.path_for(key);
        let tmp = path.with_extension(format!("json.{}.tmp", std::process::id()));

        std::fs::write(&tmp, value).map_err(|e| Self::io_error(&tmp, e))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(Self::io_error(&path, e));
        }

        debug!("Stored {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }
}
