//! File-based status source.
//!
//! Reads a saved `tailscale status --self --json` capture from disk. Useful
//! for tests and for building inventory on a machine other than the one
//! that produced the report.

use std::fs;
use std::path::{Path, PathBuf};

use super::{StatusSource, TailscaleStatus};
use crate::error::{Error, Result};

/// A status source that reads a report from a JSON file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusSource for FileSource {
    fn fetch(&self) -> Result<TailscaleStatus> {
        let content = fs::read_to_string(&self.path).map_err(|e| Error::SourceUnavailable {
            reason: format!("could not read {}: {e}", self.path.display()),
        })?;
        TailscaleStatus::parse(&content)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
