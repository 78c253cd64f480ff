//! Most-recently-used file list with JSON persistence
//!
//! ## Storage
//!
//! The list is stored as a single JSON array of absolute paths, most recent
//! first, at `$XDG_DATA_HOME/slate/recent.json` unless an explicit path is
//! supplied. Writes are atomic (temp file + rename) and whole-file.
//!
//! Persistence is best-effort: `save_data` and `load_data` log and swallow
//! every failure, and a missing or corrupt file loads as an empty list.
//!
//! ## Replay order
//!
//! `add` always inserts at the front, so `load_data` must replay the stored
//! most-recent-first sequence from its LAST element to its first. Replaying
//! forward would silently reverse the list on every round-trip.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::DirectoryContext;
use crate::primitives::path_utils::{is_blank, paths_equal_ignore_case, resolve_absolute};
use crate::services::fs::write_atomic;

/// Persistence error types
#[derive(Debug)]
pub enum RecentListError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for RecentListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for RecentListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for RecentListError {
    fn from(e: io::Error) -> Self {
        RecentListError::Io(e)
    }
}

impl From<serde_json::Error> for RecentListError {
    fn from(e: serde_json::Error) -> Self {
        RecentListError::Json(e)
    }
}

/// Bounded MRU list of file paths
#[derive(Debug, Clone)]
pub struct RecentList {
    /// Most recent first, no case-insensitive duplicates
    items: Vec<PathBuf>,
    storage_path: PathBuf,
}

impl RecentList {
    /// Maximum number of entries kept
    pub const MAX_ITEMS: usize = 5;

    /// Create an empty list bound to `storage_path`
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            items: Vec::new(),
            storage_path: storage_path.into(),
        }
    }

    /// Create an empty list bound to the default location of `dir_context`
    pub fn from_context(dir_context: &DirectoryContext) -> Self {
        Self::new(dir_context.recent_files_path())
    }

    pub fn items(&self) -> &[PathBuf] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.items.get(index).map(PathBuf::as_path)
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Whether a case-insensitive match of the resolved `path` is present
    pub fn contains(&self, path: &Path) -> bool {
        match resolve_absolute(path) {
            Ok(full) => self.items.iter().any(|p| paths_equal_ignore_case(p, &full)),
            Err(_) => false,
        }
    }

    /// Record `path` as the most recently used file
    ///
    /// Moves an existing case-insensitive match to the front, otherwise
    /// inserts it there, then trims the tail to `MAX_ITEMS`. Blank paths are
    /// ignored.
    pub fn add(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if is_blank(path) {
            return;
        }
        let full = match resolve_absolute(path) {
            Ok(full) => full,
            Err(e) => {
                tracing::warn!("Cannot resolve recent file {:?}: {}", path, e);
                return;
            }
        };

        self.items.retain(|p| !paths_equal_ignore_case(p, &full));
        self.items.insert(0, full);

        if self.items.len() > Self::MAX_ITEMS {
            self.items.truncate(Self::MAX_ITEMS);
        }
    }

    /// Remove every case-insensitive match of the resolved `path`
    pub fn remove(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if is_blank(path) {
            return;
        }
        if let Ok(full) = resolve_absolute(path) {
            self.items.retain(|p| !paths_equal_ignore_case(p, &full));
        }
    }

    /// Persist the list, logging and swallowing any failure
    pub fn save_data(&self) {
        match self.try_save() {
            Ok(()) => tracing::trace!("Recent files saved to {:?}", self.storage_path),
            Err(e) => tracing::warn!(
                "Failed to save recent files to {:?}: {}",
                self.storage_path,
                e
            ),
        }
    }

    /// Persist the list, reporting failures
    pub fn try_save(&self) -> Result<(), RecentListError> {
        if let Some(parent) = self.storage_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.items)?;
        write_atomic(&self.storage_path, content.as_bytes())?;
        Ok(())
    }

    /// Replace the in-memory list with the persisted one
    ///
    /// A missing, unreadable or corrupt file leaves the list empty.
    pub fn load_data(&mut self) {
        if let Err(e) = self.try_load() {
            tracing::warn!(
                "Ignoring unreadable recent files at {:?}: {}",
                self.storage_path,
                e
            );
            self.items.clear();
        }
    }

    /// Replace the in-memory list with the persisted one, reporting failures
    ///
    /// A missing file is not an error. The list is empty after a failure.
    pub fn try_load(&mut self) -> Result<(), RecentListError> {
        self.items.clear();

        if !self.storage_path.exists() {
            tracing::debug!("No recent files at {:?}", self.storage_path);
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.storage_path)?;
        let stored: Vec<PathBuf> = serde_json::from_str(&content)?;

        // Least recent first, so each add lands in front of the older ones
        for path in stored.iter().rev() {
            self.add(path);
        }

        tracing::debug!(
            "Loaded {} recent files from {:?}",
            self.items.len(),
            self.storage_path
        );
        Ok(())
    }
}
