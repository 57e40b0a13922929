//! Common test utilities for pkgguard integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary directory holding a `.pkgguard` registry
pub struct TestRegistry {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Registry root
    pub path: PathBuf,
}

impl TestRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join(".pkgguard")).expect("Failed to create .pkgguard");
        Self { temp, path }
    }

    /// Create a registry holding `(name, requires)` records, each installed
    /// under `packages/<name>`
    pub fn with_packages(packages: &[(&str, &[&str])]) -> Self {
        let registry = Self::new();
        let records: Vec<Value> = packages
            .iter()
            .map(|(name, requires)| {
                registry.create_install_dir(name);
                json!({
                    "name": name,
                    "version": "1.0.0",
                    "requires": requires,
                    "path": format!("packages/{name}"),
                })
            })
            .collect();
        registry.write_manifest(&json!({ "packages": records }).to_string());
        registry
    }

    /// Overwrite the manifest with raw content
    pub fn write_manifest(&self, content: &str) {
        std::fs::write(self.manifest_path(), content).expect("Failed to write manifest");
    }

    /// Path to `.pkgguard/registry.json`
    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(".pkgguard").join("registry.json")
    }

    /// Raw manifest content
    pub fn read_manifest(&self) -> String {
        std::fs::read_to_string(self.manifest_path()).expect("Failed to read manifest")
    }

    /// Names of the packages recorded in the manifest, in order
    pub fn package_names(&self) -> Vec<String> {
        let manifest: Value =
            serde_json::from_str(&self.read_manifest()).expect("Manifest is not valid JSON");
        manifest["packages"]
            .as_array()
            .expect("packages should be an array")
            .iter()
            .filter_map(|p| p["name"].as_str().map(str::to_string))
            .collect()
    }

    /// Create `packages/<name>` with a marker file
    pub fn create_install_dir(&self, name: &str) -> PathBuf {
        let dir = self.path.join("packages").join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create install directory");
        std::fs::write(dir.join("marker"), name).expect("Failed to write marker file");
        dir
    }

    /// Check whether `packages/<name>` still exists
    pub fn install_dir_exists(&self, name: &str) -> bool {
        self.path.join("packages").join(name).exists()
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `pkgguard` command running inside `root` with a clean environment
pub fn pkgguard_cmd(root: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pkgguard").expect("Failed to find pkgguard binary");
    cmd.current_dir(root)
        .env_remove("PKGGUARD_ROOT")
        .env_remove("PKGGUARD_LOG")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

/// The A/B/C registry: A has no requirements, B requires A, C requires B
#[allow(dead_code)]
pub fn abc_registry() -> TestRegistry {
    TestRegistry::with_packages(&[("A", &[]), ("B", &["A"]), ("C", &["B"])])
}
