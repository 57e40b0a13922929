//! Command implementations for the pkgguard CLI

pub mod check;
pub mod completions;
pub mod delete;
pub mod list;
pub mod version;

use std::path::PathBuf;

use crate::error::{self, Result};
use crate::registry::ManifestRegistry;

/// Open the registry enclosing `root`, or the current directory when no
/// root was given
pub fn open_registry(root: Option<PathBuf>) -> Result<ManifestRegistry> {
    let start = match root {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| {
            error::fs::io_error(format!("Failed to get current directory: {e}"))
        })?,
    };
    ManifestRegistry::discover(&start)
}
