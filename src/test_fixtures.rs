//! Test fixtures for the deletion guard.
//!
//! Provides an in-memory [`PackageRegistry`] and a scripted [`Confirm`] so the
//! guard can be exercised without a registry on disk or a live terminal.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{MemoryRegistry, ScriptedConfirm, request};
//!
//! let mut registry = MemoryRegistry::new(vec![InstalledPackage::new("a", ["b"])]);
//! let mut confirm = ScriptedConfirm::answering(&[true]);
//! DeleteOperation::new(&mut registry, &mut confirm).safe_delete_packages(&request(&["a"]), false);
//! ```

use std::collections::VecDeque;

use crate::error::{self, Result};
use crate::operations::delete::Confirm;
use crate::registry::{InstalledPackage, PackageRegistry};

/// Build an owned request from string literals.
#[must_use]
pub fn request(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Registry held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    pub packages: Vec<InstalledPackage>,
    /// Identifiers passed to `remove_installed_instances`, in call order
    pub removal_log: Vec<String>,
    fail_on: Option<String>,
    reject_on: Option<String>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new(packages: Vec<InstalledPackage>) -> Self {
        Self {
            packages,
            ..Self::default()
        }
    }

    /// Make removal of `name` fail like a broken collaborator would.
    #[must_use]
    pub fn failing_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }

    /// Make the removal preflight refuse any batch containing `name`.
    #[must_use]
    pub fn rejecting_on(mut self, name: &str) -> Self {
        self.reject_on = Some(name.to_string());
        self
    }

    /// Installed names in registry order, one per record.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name.clone()).collect()
    }
}

impl PackageRegistry for MemoryRegistry {
    fn installed_packages(&self) -> &[InstalledPackage] {
        &self.packages
    }

    fn preflight_removal(&self, names: &[String]) -> Result<()> {
        match &self.reject_on {
            Some(name) if names.contains(name) => {
                Err(error::deletion::removal_failed(name, "simulated preflight rejection"))
            }
            _ => Ok(()),
        }
    }

    fn remove_installed_instances(&mut self, name: &str) -> Result<usize> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(error::deletion::removal_failed(name, "simulated failure"));
        }

        self.removal_log.push(name.to_string());
        let before = self.packages.len();
        self.packages.retain(|p| p.name != name);
        Ok(before - self.packages.len())
    }
}

/// Confirmation double that replays fixed answers and records every prompt.
///
/// Answers `false` once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    #[must_use]
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            prompts: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
