//! Build mode and the policy table derived from it.

use serde::Serialize;
use std::fmt;

/// Environment variable that selects the build mode.
pub const MODE_ENV: &str = "NODE_ENV";

/// Build mode, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fast, debuggable, unhashed output.
    Development,
    /// Optimized, cache-busted output.
    Production,
}

impl Mode {
    /// Read the mode from `NODE_ENV`.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MODE_ENV).ok().as_deref())
    }

    /// Only the exact string `"development"` selects development.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    #[inline]
    pub const fn is_development(self) -> bool {
        !self.is_production()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Resolve the policy row for this mode.
    pub const fn policy(self) -> BuildPolicy {
        if self.is_development() {
            BuildPolicy::DEVELOPMENT
        } else {
            BuildPolicy::PRODUCTION
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every mode-dependent decision, resolved into plain data.
///
/// Builders read these fields instead of branching on [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildPolicy {
    pub mode: Mode,

    /// Add a content-hash placeholder to emitted filenames.
    pub hash_filenames: bool,

    /// Run stylesheet and script minimizers.
    pub minimize: bool,

    /// Hot-reload extracted stylesheets.
    pub hot_reload: bool,

    /// Lint scripts and rewrite fixable violations in place.
    pub lint_autofix: bool,

    /// Source-map policy (empty string disables source maps).
    pub devtool: &'static str,
}

impl BuildPolicy {
    /// Development: stable filenames, no minimization, lint-on-build.
    pub const DEVELOPMENT: Self = Self {
        mode: Mode::Development,
        hash_filenames: false,
        minimize: false,
        hot_reload: true,
        lint_autofix: true,
        devtool: "source-map",
    };

    /// Production: hashed filenames, minimized output.
    pub const PRODUCTION: Self = Self {
        mode: Mode::Production,
        hash_filenames: true,
        minimize: true,
        hot_reload: false,
        lint_autofix: false,
        devtool: "",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_development_selects_development() {
        assert_eq!(
            Mode::from_env_value(Some("development")),
            Mode::Development
        );
        assert_eq!(Mode::from_env_value(Some("Development")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("dev")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("production")), Mode::Production);
    }

    #[test]
    fn test_absent_defaults_to_production() {
        assert_eq!(Mode::from_env_value(None), Mode::Production);
    }

    #[test]
    fn test_flags_are_complements() {
        for mode in [Mode::Development, Mode::Production] {
            assert_ne!(mode.is_development(), mode.is_production());
        }
    }

    #[test]
    fn test_policy_rows_match_mode() {
        assert_eq!(Mode::Development.policy().mode, Mode::Development);
        assert_eq!(Mode::Production.policy().mode, Mode::Production);
        assert!(!BuildPolicy::DEVELOPMENT.hash_filenames);
        assert!(BuildPolicy::PRODUCTION.hash_filenames);
        assert_eq!(BuildPolicy::DEVELOPMENT.devtool, "source-map");
        assert_eq!(BuildPolicy::PRODUCTION.devtool, "");
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Mode::Development).unwrap(),
            "\"development\""
        );
        assert_eq!(Mode::Production.to_string(), "production");
    }
}
