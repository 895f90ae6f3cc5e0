//! `[resolve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [resolve]
//! extensions = [".js", ".json"]
//!
//! [resolve.alias]
//! "@modules" = "assets/dev/js/modules"
//! "@" = "assets/dev"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Extensions tried, in order, for extensionless imports.
    pub extensions: Vec<String>,

    /// Import prefix -> directory (relative to the project root).
    pub alias: BTreeMap<String, PathBuf>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extensions: vec![".js".into(), ".json".into()],
            alias: BTreeMap::from([
                ("@modules".to_owned(), "assets/dev/js/modules".into()),
                ("@dev".to_owned(), "assets/dev/".into()),
                ("@".to_owned(), "assets/dev".into()),
            ]),
        }
    }
}

impl ResolveConfig {
    const EXTENSIONS: FieldPath = FieldPath::new("resolve.extensions");
    const ALIAS: FieldPath = FieldPath::new("resolve.alias");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                diag.error_with_hint(
                    Self::EXTENSIONS,
                    format!("invalid extension `{ext}`"),
                    format!("extensions start with a dot, e.g. \".{}\"", ext.trim_start_matches('.')),
                );
            }
        }

        if self.alias.keys().any(|key| key.trim().is_empty()) {
            diag.error(Self::ALIAS, "alias name is empty");
        }
    }

    /// Resolve alias targets against the project root.
    pub fn normalize(&mut self, root: &Path) {
        for target in self.alias.values_mut() {
            *target = crate::utils::path::resolve_under(root, target);
        }
    }
}
