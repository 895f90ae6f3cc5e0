//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! context = "assets/dev"          # Base directory for entry modules
//! output = "assets/templates"     # Where the engine emits bundles
//! manifest = "manifest.json"      # Asset manifest (relative to `output`)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Source context directory. Entry modules resolve against it.
    pub context: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Manifest file, relative to `output`.
    pub manifest: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            context: "assets/dev".into(),
            output: "assets/templates".into(),
            manifest: "manifest.json".into(),
        }
    }
}

impl PathsConfig {
    const MANIFEST: FieldPath = FieldPath::new("paths.manifest");

    /// Location of the manifest the engine writes.
    pub fn manifest_path(&self) -> PathBuf {
        self.output.join(&self.manifest)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let is_json = self
            .manifest
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            diag.error_with_hint(
                Self::MANIFEST,
                format!("manifest must be a .json file: {}", self.manifest.display()),
                "e.g. manifest = \"manifest.json\"",
            );
        }
    }

    /// Resolve `context` and `output` against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.context = crate::utils::path::resolve_under(root, &self.context);
        self.output = crate::utils::path::resolve_under(root, &self.output);
    }
}
