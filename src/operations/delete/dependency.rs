//! Reverse-dependency index for the delete operation
//!
//! Maps each installed requirement to the installed packages that still need
//! it. Packages in the excluded set contribute nothing, so a batch can delete a
//! package together with its only dependents.

use std::collections::{HashMap, HashSet};

use crate::registry::PackageRegistry;

/// requirement -> dependents, dependents in registry enumeration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseDependencyIndex {
    dependents: HashMap<String, Vec<String>>,
}

impl ReverseDependencyIndex {
    /// Installed packages that declare `name` as a requirement
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.dependents.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of requirements with at least one dependent
    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}

/// Build the reverse-dependency index, ignoring requirements declared by
/// packages in `excluded`.
///
/// Requirements that are not themselves installed are not recorded.
pub fn build_reverse_dependency_index<R>(
    registry: &R,
    excluded: &HashSet<String>,
) -> ReverseDependencyIndex
where
    R: PackageRegistry + ?Sized,
{
    let installed: HashSet<&str> = registry
        .installed_packages()
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    let mut dependents: HashMap<String, Vec<String>> = HashMap::new();

    for package in registry.installed_packages() {
        if excluded.contains(&package.name) {
            continue;
        }

        for requirement in &package.requires {
            if !installed.contains(requirement.as_str()) {
                continue;
            }

            let entry = dependents.entry(requirement.clone()).or_default();
            // One entry per dependent, even with repeated declarations or
            // several installs of the same dependent
            if !entry.contains(&package.name) {
                entry.push(package.name.clone());
            }
        }
    }

    ReverseDependencyIndex { dependents }
}
