//! Append-only record of outbound API calls for pay-per-use cost tracking.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::CallLogError;

/// Appends one entry per API call and counts calls for the run.
///
/// Each entry is two lines plus a blank separator:
///
/// ```text
/// [2025-01-15T12:00:00.123456] Call #1: tweets/search/recent
///   Params: {"query":"PNKSTR","max_results":100}
/// ```
#[derive(Debug)]
pub struct CallLogger {
    path: PathBuf,
    calls: u64,
}

impl CallLogger {
    /// Prepares a logger writing to `path`, creating its parent directory.
    ///
    /// The file itself is created on the first [`CallLogger::record`].
    ///
    /// # Errors
    ///
    /// Returns [`CallLogError::Io`] if the parent directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, CallLogError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CallLogError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(Self { path, calls: 0 })
    }

    /// Records one call and returns its sequence number (starting at 1).
    ///
    /// # Errors
    ///
    /// Returns [`CallLogError::Io`] if the log file cannot be opened or written.
    /// The counter is still advanced: the call is about to happen regardless.
    pub fn record(
        &mut self,
        endpoint: &str,
        params: &serde_json::Value,
    ) -> Result<u64, CallLogError> {
        self.calls += 1;
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
        let entry = format!(
            "[{timestamp}] Call #{}: {endpoint}\n  Params: {params}\n\n",
            self.calls
        );
        self.append(&entry)?;
        tracing::debug!(call = self.calls, endpoint, "recorded API call");
        Ok(self.calls)
    }

    /// Number of calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, entry: &str) -> Result<(), CallLogError> {
        let io_err = |source| CallLogError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        file.write_all(entry.as_bytes()).map_err(io_err)
    }
}
