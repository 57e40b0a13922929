//! Delete operation module
//!
//! Deletes a batch of installed packages only when no surviving package still
//! requires any of them. Coordinates validation, the reverse-dependency index,
//! confirmation, and removal. Either every requested package is removed or
//! none is.

pub mod confirmation;
pub mod dependency;
pub mod execution;
pub mod selection;
pub mod validation;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{GuardError, Result};
use crate::registry::PackageRegistry;

pub use confirmation::{Confirm, TerminalConfirm};
pub use dependency::{ReverseDependencyIndex, build_reverse_dependency_index};
pub use execution::execute_removal;
pub use selection::select_packages_interactively;

/// Result of a delete request that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Packages removed, in request order
    Deleted(Vec<String>),
    /// The confirmation was declined; nothing was removed
    Aborted,
}

/// Everything wrong with a request, for dry runs
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Requested packages, de-duplicated, in request order
    pub packages: Vec<String>,
    pub violations: Vec<GuardError>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Safe deletion of installed packages against an explicit registry handle
pub struct DeleteOperation<'a, R: PackageRegistry + ?Sized> {
    registry: &'a mut R,
    confirm: &'a mut dyn Confirm,
}

impl<'a, R: PackageRegistry + ?Sized> DeleteOperation<'a, R> {
    pub fn new(registry: &'a mut R, confirm: &'a mut dyn Confirm) -> Self {
        Self { registry, confirm }
    }

    /// Run the check phase without deleting anything
    pub fn check(&self, requested: &[String]) -> Result<Vec<String>> {
        check_packages(&*self.registry, requested)
    }

    /// Delete `requested` unless any of them is missing or still required by
    /// a package outside the request
    ///
    /// With `force` the confirmation step is skipped.
    pub fn safe_delete_packages(
        &mut self,
        requested: &[String],
        force: bool,
    ) -> Result<DeleteOutcome> {
        debug!(?requested, force, "delete requested");

        let packages = self.check(requested)?;
        if packages.is_empty() {
            return Ok(DeleteOutcome::Deleted(packages));
        }

        if !force {
            confirmation::print_deletion_summary(&packages);
            let prompt = confirmation::confirmation_prompt(&packages);
            if !self.confirm.confirm(&prompt)? {
                info!("delete declined at confirmation");
                return Ok(DeleteOutcome::Aborted);
            }
        }

        let removed = execute_removal(&mut *self.registry, &packages)?;
        info!(packages = packages.len(), instances = removed, "delete finished");

        Ok(DeleteOutcome::Deleted(packages))
    }

    /// Delete a single package, always asking for confirmation
    pub fn safe_delete(&mut self, name: &str) -> Result<DeleteOutcome> {
        self.safe_delete_packages(&[name.to_string()], false)
    }
}

/// Installation check, then dependency check, short-circuiting on the
/// first failure
///
/// Returns the de-duplicated request on success. Does not touch the
/// registry, so repeated calls give the same verdict.
pub fn check_packages<R>(registry: &R, requested: &[String]) -> Result<Vec<String>>
where
    R: PackageRegistry + ?Sized,
{
    let packages = dedup_preserving_order(requested);

    validation::check_installed(registry, &packages)?;

    let index = index_excluding(registry, &packages);
    validation::check_dependents(&packages, &index)?;

    Ok(packages)
}

/// Like [`check_packages`] but collects every problem instead of stopping at
/// the first. Dependency violations are only looked for once every
/// requested package is installed.
pub fn check_all<R>(registry: &R, requested: &[String]) -> CheckReport
where
    R: PackageRegistry + ?Sized,
{
    let packages = dedup_preserving_order(requested);

    let mut violations = validation::missing_all(registry, &packages);
    if violations.is_empty() {
        let index = index_excluding(registry, &packages);
        violations.extend(validation::dependency_violations(&packages, &index));
    }

    CheckReport {
        packages,
        violations,
    }
}

fn index_excluding<R>(registry: &R, packages: &[String]) -> ReverseDependencyIndex
where
    R: PackageRegistry + ?Sized,
{
    let excluded: HashSet<String> = packages.iter().cloned().collect();
    let index = build_reverse_dependency_index(registry, &excluded);
    debug!(requirements = index.len(), "reverse-dependency index built");
    index
}

fn dedup_preserving_order(requested: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    requested
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}
