//! # Persistent Store
//!
//! Owns the in-memory [`AppState`] and the JSON blob it is persisted to.
//!
//! ## Contract
//! ```text
//! open(path)   read blob; absent or unparsable → seeded defaults (never errors)
//! state()      read-only view of the current state
//! update(f)    next = f(current); swap in; best-effort persist
//! ```
//!
//! ## Durability Policy
//! At-least-in-memory consistency, best-effort durability: a failed disk
//! write is logged as a warning and the in-memory commit stands. Nothing in
//! this module is fatal, and a transform is never rolled back.
//!
//! ## Atomicity
//! All mutation happens through whole-state transforms submitted one at a
//! time, so no reader ever observes a half-applied change (e.g. a sale
//! appended without its stock decrement).

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::state::AppState;

/// File name of the state blob inside the data directory.
pub const STATE_FILE_NAME: &str = "balong_pos_state.json";

/// The state container. Every component that wants to read or mutate shop
/// state goes through a reference to this.
#[derive(Debug)]
pub struct Store {
    path: Option<PathBuf>,
    state: AppState,
    last_write_error: Option<StoreError>,
}

impl Store {
    /// Opens the store backed by the given file.
    ///
    /// A missing file is first run; an unreadable or unparsable file is
    /// corruption. Both degrade to [`AppState::seed`] with a warning -
    /// loading never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = Self::load(&path);
        Store {
            path: Some(path),
            state,
            last_write_error: None,
        }
    }

    /// Opens a store with no backing file. State lives for the process
    /// only; persistence is skipped entirely.
    pub fn in_memory() -> Self {
        Store {
            path: None,
            state: AppState::seed(),
            last_write_error: None,
        }
    }

    /// The default state file location for this platform.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "balong", "balong-pos")
            .map(|dirs| dirs.data_dir().join(STATE_FILE_NAME))
    }

    /// Read-only view of the current state. Callers must not work around
    /// this to mutate in place; all writes go through [`Store::update`].
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies a pure transform to the state and persists the result.
    ///
    /// The in-memory swap always happens; the disk write is best-effort and
    /// a failure is held in [`Store::last_write_error`] for the UI to show.
    pub fn update(&mut self, transform: impl FnOnce(AppState) -> AppState) {
        let next = transform(self.state.clone());
        self.state = next;

        match self.persist() {
            Ok(()) => self.last_write_error = None,
            Err(err) => {
                // In-memory state stands; the session keeps working.
                warn!(error = %err, "failed to persist state, continuing in memory");
                self.last_write_error = Some(err);
            }
        }
    }

    /// The error from the most recent failed disk write, if the latest
    /// `update` did not reach the file. Cleared once a persist succeeds.
    pub fn last_write_error(&self) -> Option<&StoreError> {
        self.last_write_error.as_ref()
    }

    fn load(path: &Path) -> AppState {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file, starting from defaults");
                return AppState::seed();
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read state file, using defaults");
                return AppState::seed();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "corrupt state file, using defaults");
                AppState::seed()
            }
        }
    }

    fn persist(&self) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;
        }

        let blob = serde_json::to_string_pretty(&self.state)?;
        fs::write(path, blob).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
