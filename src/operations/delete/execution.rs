//! Removal hand-off for the delete operation

use tracing::{debug, warn};

use crate::error::Result;
use crate::registry::PackageRegistry;

/// Remove every installed instance of each package, in request order
///
/// The registry's preflight runs over the whole batch first, so a package it
/// refuses stops the batch before anything is removed. Returns the number of
/// installed records removed. Collaborator failures propagate unchanged.
pub fn execute_removal<R>(registry: &mut R, packages: &[String]) -> Result<usize>
where
    R: PackageRegistry + ?Sized,
{
    registry.preflight_removal(packages)?;

    let mut removed = 0;
    for name in packages {
        let count = registry.remove_installed_instances(name)?;
        if count == 0 {
            warn!(package = %name, "no installed instance left to remove");
        }
        debug!(package = %name, instances = count, "package removed");
        removed += count;
    }
    Ok(removed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::InstalledPackage;
    use crate::test_fixtures::{MemoryRegistry, request};

    #[test]
    fn test_removes_every_instance() {
        let mut registry = MemoryRegistry::new(vec![
            InstalledPackage::new("tool", Vec::<String>::new()),
            InstalledPackage::new("lib", Vec::<String>::new()),
            InstalledPackage::new("tool", Vec::<String>::new()),
        ]);

        let removed = execute_removal(&mut registry, &request(&["tool"])).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(registry.names(), vec!["lib"]);
        assert_eq!(registry.removal_log, vec!["tool"]);
    }

    #[test]
    fn test_collaborator_failure_propagates() {
        let mut registry = MemoryRegistry::new(vec![
            InstalledPackage::new("a", Vec::<String>::new()),
            InstalledPackage::new("b", Vec::<String>::new()),
        ])
        .failing_on("b");

        let result = execute_removal(&mut registry, &request(&["a", "b"]));
        assert!(matches!(
            result.unwrap_err(),
            crate::error::GuardError::RemovalFailed { ref name, .. } if name == "b"
        ));
    }

    #[test]
    fn test_preflight_rejection_removes_nothing() {
        let mut registry = MemoryRegistry::new(vec![
            InstalledPackage::new("a", Vec::<String>::new()),
            InstalledPackage::new("b", Vec::<String>::new()),
        ])
        .rejecting_on("b");

        let result = execute_removal(&mut registry, &request(&["a", "b"]));
        assert!(matches!(
            result.unwrap_err(),
            crate::error::GuardError::RemovalFailed { ref name, .. } if name == "b"
        ));
        assert!(registry.removal_log.is_empty());
        assert_eq!(registry.names(), vec!["a", "b"]);
    }
}
