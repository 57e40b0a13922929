//! Installed package registry
//!
//! The deletion guard never reads or writes registry storage directly. It
//! talks to a [`PackageRegistry`] handle that is passed in explicitly, which
//! keeps the guard free of process-wide state and lets tests drive it with
//! in-memory fixtures.
//!
//! [`manifest::ManifestRegistry`] is the on-disk implementation used by the CLI.

pub mod manifest;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use manifest::ManifestRegistry;

/// One physical install of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    /// Package identifier
    pub name: String,

    /// Installed version (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Identifiers of the packages this one requires, in declaration order
    #[serde(default)]
    pub requires: Vec<String>,

    /// Install directory relative to the registry root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl InstalledPackage {
    /// Create a record with no version or install directory
    pub fn new<I, S>(name: impl Into<String>, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            version: None,
            requires: requires.into_iter().map(Into::into).collect(),
            path: None,
        }
    }
}

/// Registry capability consumed by the deletion guard
pub trait PackageRegistry {
    /// Every installed record, in the registry's enumeration order
    fn installed_packages(&self) -> &[InstalledPackage];

    /// Whether at least one install of `name` exists
    fn is_installed(&self, name: &str) -> bool {
        self.installed_packages().iter().any(|p| p.name == name)
    }

    /// Fail if any instance of `names` could not be removed, before anything
    /// is touched
    fn preflight_removal(&self, _names: &[String]) -> Result<()> {
        Ok(())
    }

    /// Remove every installed instance matching `name`, returning how many
    /// records were removed
    fn remove_installed_instances(&mut self, name: &str) -> Result<usize>;
}
