//! Saving a fetched body to disk.
//!
//! Paths are taken as typed: relative names resolve against the current
//! working directory, absolute paths are used as given.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to every name the user enters.
pub const HTML_SUFFIX: &str = ".html";

/// Outcome of the save dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDecision {
    /// The user declined to save.
    Skip,
    /// Write here. Overwrite was already confirmed if the file existed.
    Save(PathBuf),
}

/// Target path for a base name: `report` → `report.html`.
pub fn html_path(base_name: &str) -> PathBuf {
    PathBuf::from(format!("{base_name}{HTML_SUFFIX}"))
}

/// Write `body` as UTF-8, replacing any existing file wholesale.
pub fn write_body(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = body.len(), "saved body");
    Ok(())
}
