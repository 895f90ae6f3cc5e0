//! `[sprite]` section configuration.
//!
//! ```toml
//! [sprite]
//! filename = "sprite.svg"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Filename of the extracted icon sprite.
    pub filename: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            filename: "sprite.svg".into(),
        }
    }
}

impl SpriteConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.filename.to_ascii_lowercase().ends_with(".svg") {
            diag.error(
                FieldPath::new("sprite.filename"),
                format!("sprite must be an .svg file: {}", self.filename),
            );
        }
    }
}
