//! Project layout configuration from `kiln.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! The default file is optional. Without one, the fixed default layout
//! applies with the current directory as project root. A file named with
//! `-C` must exist.

pub mod section;
pub mod types;
mod util;

pub use section::{EntryConfig, PathsConfig, ResolveConfig, ScriptConfig, SpriteConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Config file looked for when `-C` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "kiln.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `kiln.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root - parent of the config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub entry: EntryConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub script: ScriptConfig,

    #[serde(default)]
    pub sprite: SpriteConfig,
}

impl ProjectConfig {
    /// Load the project layout for the CLI invocation.
    ///
    /// Searches upward from cwd for the config file. Paths in the result are
    /// absolute.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        match &cli.config {
            Some(config_name) => Self::load_required(config_name, &cwd),
            None => Self::load_from(Path::new(DEFAULT_CONFIG_NAME), &cwd),
        }
    }

    /// Load starting the config search at `start`, falling back to the
    /// default layout when no file is found.
    pub fn load_from(config_name: &Path, start: &Path) -> Result<Self> {
        Self::load_found(find_config_file(config_name, start), config_name, start)
    }

    /// Like [`load_from`](Self::load_from), but a missing file is an error.
    pub fn load_required(config_name: &Path, start: &Path) -> Result<Self> {
        let path = find_config_file(config_name, start).ok_or_else(|| {
            ConfigError::Io(
                start.join(config_name),
                io::Error::new(io::ErrorKind::NotFound, "config file not found"),
            )
        })?;
        Self::load_found(Some(path), config_name, start)
    }

    fn load_found(found: Option<PathBuf>, config_name: &Path, start: &Path) -> Result<Self> {
        let mut diag = ConfigDiagnostics::new();

        let mut config = match found {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path, &mut diag)?;
                config.root = path
                    .parent()
                    .map(crate::utils::path::normalize_path)
                    .unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "no {} found, using default layout", config_name.display());
                Self {
                    root: crate::utils::path::normalize_path(start),
                    ..Self::default()
                }
            }
        };

        diag.print_warnings();

        config.validate()?;
        let root = config.root.clone();
        config.normalize_paths(&root);

        Ok(config)
    }

    /// Read and parse a config file, recording unknown fields.
    fn from_path(path: &Path, diag: &mut ConfigDiagnostics) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        for field in ignored {
            diag.unknown_field(field);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Manifest location (absolute after loading).
    pub fn manifest_path(&self) -> PathBuf {
        self.paths.manifest_path()
    }

    /// Resolve every configured path against the project root.
    fn normalize_paths(&mut self, root: &Path) {
        self.paths.normalize(root);
        self.resolve.normalize(root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every section's errors and report them at once.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.paths.validate(&mut diag);
        self.entry.validate(&mut diag);
        self.resolve.validate(&mut diag);
        self.script.validate(&mut diag);
        self.sprite.validate(&mut diag);
        diag
    }

    pub fn validate(&self) -> Result<()> {
        self.diagnostics()
            .into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_invalid_toml() {
        let err = ProjectConfig::parse_with_ignored("[paths\ncontext = \"src\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_empty_file_is_default_layout() {
        assert_eq!(test_parse_config(""), ProjectConfig::default());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[paths]\ncontext = \"src\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.paths.context, PathBuf::from("src"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = TempDir::new().unwrap();
        let config =
            ProjectConfig::load_from(Path::new("kiln-absent-91c2.toml"), dir.path()).unwrap();
        let root = crate::utils::path::normalize_path(dir.path());

        assert!(config.config_path.is_none());
        assert_eq!(config.root, root);
        assert_eq!(config.paths.context, root.join("assets/dev"));
        assert_eq!(
            config.manifest_path(),
            root.join("assets/templates/manifest.json")
        );
        assert_eq!(config.resolve.alias["@dev"], root.join("assets/dev"));
    }

    #[test]
    fn test_named_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = ProjectConfig::load_required(Path::new("custom-absent.toml"), dir.path())
            .unwrap_err();
        let Some(ConfigError::Io(path, source)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected io error, got {err:?}");
        };
        assert_eq!(path, &dir.path().join("custom-absent.toml"));
        assert_eq!(source.kind(), io::ErrorKind::NotFound);

        let absolute = dir.path().join("nested/custom.toml");
        assert!(ProjectConfig::load_required(&absolute, dir.path()).is_err());
    }

    #[test]
    fn test_named_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.toml"), "[sprite]\nfilename = \"icons.svg\"\n").unwrap();

        let config = ProjectConfig::load_required(Path::new("custom.toml"), dir.path()).unwrap();
        assert_eq!(config.config_path, Some(dir.path().join("custom.toml")));
        assert_eq!(config.sprite.filename, "icons.svg");
    }

    #[test]
    fn test_load_config_from_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("web/src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join("kiln.toml"),
            "[paths]\ncontext = \"web/src\"\noutput = \"web/dist\"\n",
        )
        .unwrap();

        let config = ProjectConfig::load_from(Path::new("kiln.toml"), &nested).unwrap();
        let root = crate::utils::path::normalize_path(dir.path());

        assert_eq!(config.root, root);
        assert_eq!(config.paths.context, root.join("web/src"));
        assert_eq!(config.paths.output, root.join("web/dist"));
    }

    #[test]
    fn test_load_reports_all_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("kiln.toml"),
            "[entry]\nmain = []\n[sprite]\nfilename = \"icons.png\"\n",
        )
        .unwrap();

        let err = ProjectConfig::load_from(Path::new("kiln.toml"), dir.path()).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("kiln.toml"), "[paths\n").unwrap();
        assert!(ProjectConfig::load_from(Path::new("kiln.toml"), dir.path()).is_err());
    }
}
