//! Locating firebase.json on disk
//!
//! The lookup is a trait so the export hook can run against an in-memory
//! configuration in tests.

use crate::config::firebase_json::FirebaseConfig;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const FIREBASE_CONFIG_FILE: &str = "firebase.json";

/// Finds and reads the hosting configuration for a project directory
pub trait ConfigLocator {
    /// Name of the file being looked for, used in error messages
    fn file_name(&self) -> &str;

    /// Returns the path of the configuration file visible from `start`
    fn locate(&self, start: &Path) -> Option<PathBuf>;

    /// Reads the file found by `locate`
    fn read(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }

    /// Locates, reads and parses the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no file is visible from `start`,
    /// `ConfigError::Io` if it cannot be read and `ConfigError::Parse` if it
    /// is not valid JSON.
    fn load(&self, start: &Path) -> Result<FirebaseConfig, ConfigError> {
        let path = self.locate(start).ok_or_else(|| ConfigError::NotFound {
            file_name: self.file_name().to_string(),
            start: start.to_path_buf(),
        })?;
        let content = self.read(&path)?;
        FirebaseConfig::parse(path, &content)
    }
}

/// Searches `start` and each of its ancestors for a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindUp {
    file_name: String,
}

impl FindUp {
    pub fn new(file_name: impl Into<String>) -> Self {
        FindUp {
            file_name: file_name.into(),
        }
    }
}

impl Default for FindUp {
    fn default() -> Self {
        Self::new(FIREBASE_CONFIG_FILE)
    }
}

impl ConfigLocator for FindUp {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn locate(&self, start: &Path) -> Option<PathBuf> {
        // Relative starts are resolved so the walk reaches the filesystem root
        let start = if start.is_absolute() {
            start.to_path_buf()
        } else {
            std::env::current_dir().ok()?.join(start)
        };

        start
            .ancestors()
            .map(|dir| dir.join(&self.file_name))
            .find(|candidate| candidate.is_file())
    }
}

/// A configuration held in memory, reported at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryConfig {
    path: PathBuf,
    content: String,
}

impl InMemoryConfig {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        InMemoryConfig {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl ConfigLocator for InMemoryConfig {
    fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(FIREBASE_CONFIG_FILE)
    }

    fn locate(&self, _start: &Path) -> Option<PathBuf> {
        Some(self.path.clone())
    }

    fn read(&self, _path: &Path) -> std::io::Result<String> {
        Ok(self.content.clone())
    }
}
