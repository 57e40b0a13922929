//! Package selection for the delete operation
//!
//! The interactive menu only offers installed package names, so anything
//! picked here passes the installation check by construction.

use std::collections::HashMap;

use inquire::MultiSelect;

use crate::error::Result;
use crate::registry::PackageRegistry;

/// One menu entry per installed name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    /// Package identifier
    pub name: String,
    /// Menu label, with the installed versions in parentheses when known
    /// (e.g. "tool (1.0, 2.0)")
    pub label: String,
}

/// Menu entries in registry order, one per installed name
pub fn selection_entries<R>(registry: &R) -> Vec<SelectionEntry>
where
    R: PackageRegistry + ?Sized,
{
    let mut order: Vec<&str> = Vec::new();
    let mut versions: HashMap<&str, Vec<&str>> = HashMap::new();

    for package in registry.installed_packages() {
        let name = package.name.as_str();
        if !versions.contains_key(name) {
            order.push(name);
        }
        let entry = versions.entry(name).or_default();
        if let Some(version) = package.version.as_deref() {
            entry.push(version);
        }
    }

    order
        .into_iter()
        .map(|name| {
            let label = match versions.get(name) {
                Some(v) if !v.is_empty() => format!("{} ({})", name, v.join(", ")),
                _ => name.to_string(),
            };
            SelectionEntry {
                name: name.to_string(),
                label,
            }
        })
        .collect()
}

/// Names of the entries at the selected menu positions
pub fn selected_names(entries: &[SelectionEntry], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&index| entries.get(index))
        .map(|entry| entry.name.clone())
        .collect()
}

/// Select packages interactively from the installed set
///
/// Returns an empty list when nothing is installed or the menu is skipped.
pub fn select_packages_interactively<R>(registry: &R) -> Result<Vec<String>>
where
    R: PackageRegistry + ?Sized,
{
    let entries = selection_entries(registry);
    if entries.is_empty() {
        println!("No packages installed.");
        return Ok(vec![]);
    }

    println!();

    let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
    let Some(selection) = MultiSelect::new("Select packages to delete", labels)
        .with_page_size(10)
        .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel")
        .raw_prompt_skippable()?
    else {
        return Ok(vec![]);
    };

    let indices: Vec<usize> = selection.iter().map(|option| option.index).collect();
    Ok(selected_names(&entries, &indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InstalledPackage;
    use crate::test_fixtures::MemoryRegistry;

    fn versioned(name: &str, version: &str) -> InstalledPackage {
        InstalledPackage {
            version: Some(version.to_string()),
            ..InstalledPackage::new(name, Vec::<String>::new())
        }
    }

    #[test]
    fn test_items_follow_registry_order_and_merge_instances() {
        let registry = MemoryRegistry::new(vec![
            versioned("tool", "1.0"),
            InstalledPackage::new("plain", Vec::<String>::new()),
            versioned("tool", "2.0"),
        ]);

        let entries = selection_entries(&registry);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["tool (1.0, 2.0)", "plain"]);
        assert_eq!(selected_names(&entries, &[1, 0]), vec!["plain", "tool"]);
    }

    #[test]
    fn test_parenthesised_names_map_back_exactly() {
        let registry = MemoryRegistry::new(vec![
            InstalledPackage::new("gtk", Vec::<String>::new()),
            versioned("gtk (legacy)", "2.24"),
        ]);

        let entries = selection_entries(&registry);
        assert_eq!(entries[1].label, "gtk (legacy) (2.24)");
        assert_eq!(selected_names(&entries, &[1]), vec!["gtk (legacy)"]);
        assert_eq!(
            selected_names(&entries, &[0, 1]),
            vec!["gtk", "gtk (legacy)"]
        );
    }

    #[test]
    fn test_empty_registry_selects_nothing() {
        let registry = MemoryRegistry::new(Vec::new());
        assert!(selection_entries(&registry).is_empty());
        assert!(matches!(select_packages_interactively(&registry), Ok(v) if v.is_empty()));
    }
}
