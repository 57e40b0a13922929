//! Transaction support for registry mutations
//!
//! Backs up the registry manifest before a delete removes anything, so a
//! collaborator failure halfway through a batch does not leave the manifest
//! describing a partial deletion.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new(&registry);
//! transaction.backup_manifest()?;
//!
//! // Remove packages...
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // the manifest is restored
//! ```

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{self, Result};
use crate::registry::ManifestRegistry;

/// Manifest backup
#[derive(Debug, Clone)]
struct ManifestBackup {
    path: PathBuf,
    /// `None` when the manifest did not exist yet
    content: Option<Vec<u8>>,
}

/// A transaction around a registry mutation
#[derive(Debug)]
pub struct Transaction {
    manifest_path: PathBuf,
    backup: Option<ManifestBackup>,
    committed: bool,
}

impl Transaction {
    /// Create a new transaction for a registry
    pub fn new(registry: &ManifestRegistry) -> Self {
        Self {
            manifest_path: registry.manifest_path(),
            backup: None,
            committed: false,
        }
    }

    /// Back up the manifest as it is right now
    pub fn backup_manifest(&mut self) -> Result<()> {
        let path = self.manifest_path.clone();
        let content = if path.exists() {
            Some(
                fs::read(&path)
                    .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?,
            )
        } else {
            None
        };

        self.backup = Some(ManifestBackup { path, content });
        Ok(())
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Restore the backed up manifest
    pub fn rollback(&mut self) -> Result<()> {
        if self.committed {
            return Ok(());
        }
        let Some(backup) = &self.backup else {
            return Ok(());
        };

        debug!(path = %backup.path.display(), "rolling back registry manifest");
        match &backup.content {
            Some(content) => fs::write(&backup.path, content).map_err(|e| {
                error::fs::write_failed(backup.path.display().to_string(), e.to_string())
            })?,
            None => {
                if backup.path.exists() {
                    fs::remove_file(&backup.path).map_err(|e| {
                        error::fs::write_failed(backup.path.display().to_string(), e.to_string())
                    })?;
                }
            }
        }
        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(e) = self.rollback() {
                warn!("rollback failed: {e}");
                eprintln!("Warning: Rollback failed: {e}");
            }
        }
    }
}
