//! Pipeline-wide plugins.
//!
//! The plugin set is fixed; mode differences reach it only through the
//! [`NamingStrategy`] passed in.

use super::naming::NamingStrategy;
use super::stage::Options;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Plugin identities understood by the bundling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PluginKind {
    #[serde(rename = "clean-webpack-plugin")]
    CleanOutput,
    #[serde(rename = "copy-webpack-plugin")]
    CopyStatic,
    #[serde(rename = "mini-css-extract-plugin")]
    StyleExtract,
    #[serde(rename = "svg-sprite-loader/plugin")]
    SpriteExtract,
    #[serde(rename = "webpack-assets-manifest")]
    Manifest,
    #[serde(rename = "optimize-css-assets-webpack-plugin")]
    CssMinimizer,
    #[serde(rename = "terser-webpack-plugin")]
    ScriptMinimizer,
}

impl PluginKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CleanOutput => "clean-output",
            Self::CopyStatic => "copy-static",
            Self::StyleExtract => "style-extract",
            Self::SpriteExtract => "sprite-extract",
            Self::Manifest => "manifest",
            Self::CssMinimizer => "css-minimizer",
            Self::ScriptMinimizer => "script-minimizer",
        }
    }
}

/// A plugin plus its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginSpec {
    pub plugin: PluginKind,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub options: Options,
}

impl PluginSpec {
    pub fn new(plugin: PluginKind) -> Self {
        Self {
            plugin,
            options: Options::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_owned(), value.into());
        self
    }

    #[cfg(test)]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

/// Build the plugin list.
///
/// Order: clean, copy, style extraction, sprite extraction, manifest.
/// Clean runs before every plugin that writes output.
pub fn build_plugins(naming: &NamingStrategy, manifest: &Path) -> Vec<PluginSpec> {
    vec![
        PluginSpec::new(PluginKind::CleanOutput),
        PluginSpec::new(PluginKind::CopyStatic),
        PluginSpec::new(PluginKind::StyleExtract).with_option("filename", naming.name_for("css")),
        PluginSpec::new(PluginKind::SpriteExtract),
        PluginSpec::new(PluginKind::Manifest)
            .with_option("output", manifest.to_string_lossy().into_owned())
            .with_option("publicPath", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;
    use serde_json::json;

    /// Plugins that write into the output directory.
    fn emits(kind: PluginKind) -> bool {
        matches!(
            kind,
            PluginKind::CopyStatic
                | PluginKind::StyleExtract
                | PluginKind::SpriteExtract
                | PluginKind::Manifest
        )
    }

    fn plugins(mode: Mode) -> Vec<PluginSpec> {
        build_plugins(
            &NamingStrategy::new(&mode.policy()),
            Path::new("/site/assets/templates/manifest.json"),
        )
    }

    #[test]
    fn test_always_five_plugins_in_order() {
        for mode in [Mode::Development, Mode::Production] {
            let kinds: Vec<_> = plugins(mode).iter().map(|p| p.plugin).collect();
            assert_eq!(
                kinds,
                [
                    PluginKind::CleanOutput,
                    PluginKind::CopyStatic,
                    PluginKind::StyleExtract,
                    PluginKind::SpriteExtract,
                    PluginKind::Manifest,
                ]
            );
        }
    }

    #[test]
    fn test_clean_precedes_every_emitter() {
        for mode in [Mode::Development, Mode::Production] {
            let list = plugins(mode);
            let clean = list
                .iter()
                .position(|p| p.plugin == PluginKind::CleanOutput)
                .unwrap();
            for (i, p) in list.iter().enumerate() {
                if emits(p.plugin) {
                    assert!(clean < i, "{:?} runs before clean", p.plugin);
                }
            }
        }
    }

    #[test]
    fn test_style_extract_filename_follows_naming() {
        let dev = plugins(Mode::Development);
        let prod = plugins(Mode::Production);
        assert_eq!(dev[2].option("filename"), Some(&json!("[name].css")));
        assert_eq!(prod[2].option("filename"), Some(&json!("[name].[hash].css")));
    }

    #[test]
    fn test_manifest_options() {
        let list = plugins(Mode::Production);
        assert_eq!(
            serde_json::to_value(&list[4]).unwrap(),
            json!({
                "plugin": "webpack-assets-manifest",
                "options": {
                    "output": "/site/assets/templates/manifest.json",
                    "publicPath": true
                }
            })
        );
    }

    #[test]
    fn test_plain_plugin_omits_options() {
        assert_eq!(
            serde_json::to_value(PluginSpec::new(PluginKind::CleanOutput)).unwrap(),
            json!({ "plugin": "clean-webpack-plugin" })
        );
    }
}
