//! Precondition gates for the delete operation
//!
//! Both gates short-circuit on the first failure. The `*_all` variants collect
//! every failure instead and back the dry-run report.

use crate::error::{self, GuardError, Result};
use crate::operations::delete::dependency::ReverseDependencyIndex;
use crate::registry::PackageRegistry;

/// Fail with `NotInstalled` for the first requested package that is not installed
pub fn check_installed<R>(registry: &R, requested: &[String]) -> Result<()>
where
    R: PackageRegistry + ?Sized,
{
    match requested.iter().find(|name| !registry.is_installed(name)) {
        Some(name) => Err(error::deletion::not_installed(name)),
        None => Ok(()),
    }
}

/// Every requested package that is not installed, in request order
pub fn missing_all<R>(registry: &R, requested: &[String]) -> Vec<GuardError>
where
    R: PackageRegistry + ?Sized,
{
    requested
        .iter()
        .filter(|name| !registry.is_installed(name))
        .map(error::deletion::not_installed)
        .collect()
}

/// Dependency violations for the requested packages, lazily, in request order
pub fn dependency_violations<'a>(
    requested: &'a [String],
    index: &'a ReverseDependencyIndex,
) -> impl Iterator<Item = GuardError> + 'a {
    requested.iter().filter_map(|name| {
        let dependents = index.dependents_of(name);
        if dependents.is_empty() {
            None
        } else {
            Some(error::deletion::required_by(name, dependents.to_vec()))
        }
    })
}

/// Fail with the first dependency violation in the batch
pub fn check_dependents(requested: &[String], index: &ReverseDependencyIndex) -> Result<()> {
    match dependency_violations(requested, index).next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}
