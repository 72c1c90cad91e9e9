//! Snapshot file storage with XDG path support.
//!
//! The CLI keeps its session between runs as JSON at
//! `~/.local/share/eventscout/session.json`. Writes are atomic (temp file
//! plus rename).

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use directories::ProjectDirs;
use thiserror::Error;

use crate::Snapshot;

/// Default snapshot filename.
const SNAPSHOT_FILENAME: &str = "session.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "eventscout";

/// Errors that can occur during snapshot storage operations.
#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    #[error("failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create data directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The session file is not valid JSON for a snapshot.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for snapshot store operations.
pub type Result<T> = std::result::Result<T, SnapshotStoreError>;

/// Persistent storage for a [`Snapshot`].
///
/// # Example
///
/// ```no_run
/// use chrono::Local;
/// use eventscout_core::SnapshotStore;
///
/// let store = SnapshotStore::new()?;
/// let snapshot = store.load_or_seed(Local::now().date_naive())?;
/// store.save(&snapshot)?;
/// # Ok::<(), eventscout_core::SnapshotStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store at the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotStoreError::NoDataDir` if the home directory cannot be
    /// determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default XDG path for the session file.
    ///
    /// On Unix: `~/.local/share/eventscout/session.json`
    /// On macOS: `~/Library/Application Support/eventscout/session.json`
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(SnapshotStoreError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(SNAPSHOT_FILENAME))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the snapshot from disk.
    ///
    /// A missing file is a `ReadError` with `ErrorKind::NotFound`; use
    /// [`load_or_seed`](Self::load_or_seed) to fall back to seed data.
    pub fn load(&self) -> Result<Snapshot> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| SnapshotStoreError::ReadError {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the snapshot, or builds one from seed data if none was saved.
    ///
    /// # Errors
    ///
    /// - Returns `SnapshotStoreError::ReadError` for I/O errors other than
    ///   "file not found".
    /// - Returns `SnapshotStoreError::Json` if the file contains invalid JSON.
    pub fn load_or_seed(&self, today: NaiveDate) -> Result<Snapshot> {
        match self.load() {
            Ok(snapshot) => Ok(snapshot),
            Err(SnapshotStoreError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %self.path.display(), "no saved session, using seed data");
                Ok(Snapshot::seeded(today))
            }
            Err(e) => Err(e),
        }
    }

    /// Saves the snapshot atomically, creating the parent directory.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotStoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| SnapshotStoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| SnapshotStoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
