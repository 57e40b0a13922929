//! List command implementation
//!
//! Lists installed packages in registry order. The detailed view adds each
//! package's requirements and the installed packages that require it.

use std::collections::HashSet;
use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::open_registry;
use crate::error::Result;
use crate::operations::delete::{ReverseDependencyIndex, build_reverse_dependency_index};
use crate::registry::{InstalledPackage, PackageRegistry};

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let registry = open_registry(root)?;
    for line in list_lines(&registry, args.detailed) {
        println!("{line}");
    }
    Ok(())
}

fn list_lines<R>(registry: &R, detailed: bool) -> Vec<String>
where
    R: PackageRegistry + ?Sized,
{
    let packages = registry.installed_packages();
    if packages.is_empty() {
        return vec!["No packages installed.".to_string()];
    }

    let index = build_reverse_dependency_index(registry, &HashSet::new());

    let mut lines = vec![format!("Installed packages ({}):", packages.len()), String::new()];
    for package in packages {
        lines.push(format!("  {}", package_heading(package)));
        if detailed {
            lines.extend(package_details(package, &index));
        }
    }
    lines
}

fn package_heading(package: &InstalledPackage) -> String {
    let name = Style::new().bold().yellow().apply_to(&package.name);
    match &package.version {
        Some(version) => format!("{name} {version}"),
        None => name.to_string(),
    }
}

fn package_details(package: &InstalledPackage, index: &ReverseDependencyIndex) -> Vec<String> {
    let label = Style::new().bold();
    let mut lines = Vec::new();

    if !package.requires.is_empty() {
        lines.push(format!(
            "    {} {}",
            label.apply_to("Requires:"),
            package.requires.join(", ")
        ));
    }

    let dependents = index.dependents_of(&package.name);
    if !dependents.is_empty() {
        lines.push(format!(
            "    {} {}",
            label.apply_to("Required by:"),
            dependents.join(", ")
        ));
    }

    if let Some(path) = &package.path {
        lines.push(format!("    {} {}", label.apply_to("Path:"), path));
    }

    lines
}
