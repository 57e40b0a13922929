//! File-backed registry (`.pkgguard/registry.json`)
//!
//! ## Registry Structure
//!
//! ```text
//! <root>/
//! ├── .pkgguard/
//! │   └── registry.json   # Installed package records, in install order
//! └── packages/           # Install directories referenced by `path`
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Result};
use crate::registry::{InstalledPackage, PackageRegistry};

/// Registry directory name
pub const REGISTRY_DIR: &str = ".pkgguard";

/// Manifest filename inside the registry directory
pub const MANIFEST_FILE: &str = "registry.json";

/// Serialized form of the manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub packages: Vec<InstalledPackage>,
}

/// Registry backed by a JSON manifest on disk
#[derive(Debug)]
pub struct ManifestRegistry {
    /// Root directory (where .pkgguard is located)
    pub root: PathBuf,

    /// Path to the .pkgguard directory
    pub registry_dir: PathBuf,

    manifest: Manifest,
}

impl ManifestRegistry {
    /// Detect if a registry exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(REGISTRY_DIR).is_dir()
    }

    /// Find a registry by searching upward from the given path
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Discover and open the registry enclosing `start`
    pub fn discover(start: &Path) -> Result<Self> {
        let root = Self::find_from(start)
            .ok_or_else(|| error::registry::not_found(start.display().to_string()))?;
        Self::open(&root)
    }

    /// Open an existing registry
    ///
    /// A `.pkgguard` directory without a manifest is an empty registry.
    pub fn open(root: &Path) -> Result<Self> {
        let registry_dir = root.join(REGISTRY_DIR);
        if !registry_dir.is_dir() {
            return Err(error::registry::not_found(root.display().to_string()));
        }

        let manifest_path = registry_dir.join(MANIFEST_FILE);
        let manifest = if manifest_path.exists() {
            let content = fs::read_to_string(&manifest_path).map_err(|e| {
                error::fs::read_failed(manifest_path.display().to_string(), e.to_string())
            })?;
            serde_json::from_str(&content).map_err(|e| {
                error::registry::parse_failed(manifest_path.display().to_string(), e.to_string())
            })?
        } else {
            Manifest::default()
        };

        debug!(
            root = %root.display(),
            packages = manifest.packages.len(),
            "opened package registry"
        );

        Ok(Self {
            root: root.to_path_buf(),
            registry_dir,
            manifest,
        })
    }

    /// Path to the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.registry_dir.join(MANIFEST_FILE)
    }

    /// Write the manifest back to disk
    pub fn save(&self) -> Result<()> {
        let path = self.manifest_path();
        let json = serde_json::to_string_pretty(&self.manifest).map_err(|e| {
            error::registry::parse_failed(path.display().to_string(), e.to_string())
        })?;
        fs::write(&path, format!("{json}\n"))
            .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
    }

    /// Resolve the install directory of one record, if it has one
    fn install_dir(&self, package: &InstalledPackage) -> Result<Option<PathBuf>> {
        let Some(rel_path) = package.path.as_deref() else {
            return Ok(None);
        };

        safe_install_path(&self.root, rel_path).map(Some).ok_or_else(|| {
            error::deletion::removal_failed(
                &package.name,
                format!("install path escapes the registry root: {rel_path:?}"),
            )
        })
    }

    /// Delete the install directory of one record
    fn remove_install_dir(&self, package: &InstalledPackage) -> Result<()> {
        let Some(dir) = self.install_dir(package)? else {
            return Ok(());
        };

        if dir.exists() {
            fs::remove_dir_all(&dir)
                .map_err(|e| error::deletion::removal_failed(&package.name, e.to_string()))?;
        }
        Ok(())
    }
}

impl PackageRegistry for ManifestRegistry {
    fn installed_packages(&self) -> &[InstalledPackage] {
        &self.manifest.packages
    }

    fn preflight_removal(&self, names: &[String]) -> Result<()> {
        for package in &self.manifest.packages {
            if names.contains(&package.name) {
                self.install_dir(package)?;
            }
        }
        Ok(())
    }

    fn remove_installed_instances(&mut self, name: &str) -> Result<usize> {
        self.preflight_removal(&[name.to_string()])?;

        let instances: Vec<InstalledPackage> = self
            .manifest
            .packages
            .iter()
            .filter(|p| p.name == name)
            .cloned()
            .collect();

        for instance in &instances {
            self.remove_install_dir(instance)?;
        }

        self.manifest.packages.retain(|p| p.name != name);
        self.save()?;

        debug!(package = name, instances = instances.len(), "removed installed instances");
        Ok(instances.len())
    }
}

/// Resolve a record's install path, rejecting anything outside `root`
///
/// The path must name at least one directory below `root`, and must not
/// reach into the registry directory.
fn safe_install_path(root: &Path, rel_path: &str) -> Option<PathBuf> {
    let path = Path::new(rel_path);
    if path.is_absolute() {
        return None;
    }

    let mut depth = 0;
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => {
                if depth == 0 && part == OsStr::new(REGISTRY_DIR) {
                    return None;
                }
                depth += 1;
            }
            _ => return None,
        }
    }
    if depth == 0 {
        return None;
    }

    Some(root.join(path))
}
