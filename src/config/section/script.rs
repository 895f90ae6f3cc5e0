//! `[script]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [script]
//! preset = "@babel/preset-env"    # Transpile target preset
//! exclude = "node_modules"        # Paths containing this are not transpiled
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub preset: String,
    pub exclude: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            preset: "@babel/preset-env".into(),
            exclude: "node_modules".into(),
        }
    }
}

impl ScriptConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.preset.trim().is_empty() {
            diag.error(FieldPath::new("script.preset"), "transpile preset is empty");
        }
        if self.exclude.is_empty() {
            diag.error_with_hint(
                FieldPath::new("script.exclude"),
                "dependency directory is empty",
                "an empty pattern excludes every script",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.script.preset, "@babel/preset-env");
        assert_eq!(config.script.exclude, "node_modules");
    }

    #[test]
    fn test_empty_values_rejected() {
        let config = test_parse_config("[script]\npreset = \"\"\nexclude = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.script.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
