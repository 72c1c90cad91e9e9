//! Command implementations for the evs CLI.
//!
//! Every command except `refresh`, `config` and `completions` works purely on
//! the saved session: it loads the snapshot, applies the engine, and writes
//! the snapshot back when something changed.

pub mod completions;
pub mod config;
pub mod friends;
pub mod ledger;
pub mod list;
pub mod profile;
pub mod refresh;
pub mod show;
pub mod suggest;

use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use eventscout_core::{Snapshot, SnapshotStore};

use crate::cli::Cli;

/// Overrides the session file location.
pub const SESSION_ENV: &str = "EVENTSCOUT_SESSION";

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Session file error.
    #[error("session error: {0}")]
    Store(#[from] eventscout_core::SnapshotStoreError),

    /// Invalid filter option.
    #[error("filter error: {0}")]
    Filter(#[from] eventscout_core::filter::FilterError),

    /// API error.
    #[error("API error: {0}")]
    Api(#[from] eventscout_api::Error),

    /// Lookup of an id that isn't in the listing or directory.
    #[error("{0}")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Opens the session store, honouring `EVENTSCOUT_SESSION`.
pub fn open_store() -> Result<SnapshotStore> {
    if let Ok(path) = env::var(SESSION_ENV) {
        return Ok(SnapshotStore::with_path(PathBuf::from(path)));
    }
    Ok(SnapshotStore::new()?)
}

/// The local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Loads the saved session, falling back to seed data.
pub fn load_snapshot(store: &SnapshotStore) -> Result<Snapshot> {
    Ok(store.load_or_seed(today())?)
}
