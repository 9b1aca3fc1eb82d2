//! Single-value, file-backed record of the last sent message.
//!
//! The file holds exactly one message. It is read once per run and written
//! at most once, after a successful notification. Concurrent runs are not
//! coordinated.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{AppError, Result};

/// Owner of the persisted status file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by `path`. The file need not exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last stored message, trimmed. A missing file reads as `""`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::State` if the file exists but cannot be read.
    pub fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(raw.trim().to_owned()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no previous status recorded");
                Ok(String::new())
            }
            Err(err) => Err(AppError::State(format!(
                "failed to read {}: {err}",
                self.path.display()
            ))),
        }
    }

    /// Whether `current` differs byte-for-byte from the stored message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::State` if the stored message cannot be read.
    pub fn has_changed(&self, current: &str) -> Result<bool> {
        Ok(current != self.load()?)
    }

    /// Overwrite the stored message.
    ///
    /// Writes to a temporary file beside the target and renames it into
    /// place, so a crash never leaves a partial message behind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::State` on any I/O failure.
    pub fn save(&self, current: &str) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|err| {
            AppError::State(format!("failed to create {}: {err}", parent.display()))
        })?;

        let mut tmp = NamedTempFile::new_in(parent)
            .map_err(|err| AppError::State(format!("failed to create temporary file: {err}")))?;
        tmp.write_all(current.as_bytes())
            .map_err(|err| AppError::State(format!("failed to write temporary file: {err}")))?;
        tmp.persist(&self.path).map_err(|err| {
            AppError::State(format!("failed to persist {}: {err}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), bytes = current.len(), "status recorded");
        Ok(())
    }

    /// Compare `current` with the stored message and store it if it differs.
    ///
    /// Returns `true` exactly when the message changed. Callers that must
    /// notify before persisting use [`Self::has_changed`] and [`Self::save`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::State` if reading or writing fails.
    pub fn compare_and_update(&self, current: &str) -> Result<bool> {
        if !self.has_changed(current)? {
            return Ok(false);
        }
        self.save(current)?;
        Ok(true)
    }
}
