//! Transform stages and ordered transform chains.
//!
//! # Ordering
//!
//! A [`TransformChain`] is stored in **declaration order**: index 0 is the
//! outermost stage, which the engine applies **last**. The engine feeds a
//! source file through the chain from the final element backwards:
//!
//! ```text
//! declared:  [extract, css, sass]
//! applied:    sass -> css -> extract
//! ```
//!
//! Use [`TransformChain::applied`] whenever execution order matters.

use serde::Serialize;
use serde_json::{Map, Value};

/// Options mapping attached to a stage or plugin.
pub type Options = Map<String, Value>;

/// Loader identities understood by the bundling engine.
pub mod loader {
    /// Pulls stylesheet output out of the script bundle.
    pub const EXTRACT_CSS: &str = "mini-css-extract-plugin/loader";
    /// Parses stylesheets and resolves `@import` / `url()`.
    pub const CSS: &str = "css-loader";
    /// Compiles SCSS to CSS.
    pub const SASS: &str = "sass-loader";
    /// Transpiles modern script syntax.
    pub const BABEL: &str = "babel-loader";
    /// Lints scripts, optionally rewriting them in place.
    pub const ESLINT: &str = "eslint-loader";
    /// Emits the file unchanged and returns its public URL.
    pub const FILE: &str = "file-loader";
    /// Collects SVG icons into a sprite.
    pub const SVG_SPRITE: &str = "svg-sprite-loader";
    /// Optimizes SVG markup.
    pub const SVGO: &str = "svgo-loader";
}

/// One named, parameterized processing step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformStage {
    pub loader: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub options: Options,
}

impl TransformStage {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Options::new(),
        }
    }

    /// Set an option, replacing any previous value under `key`.
    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_owned(), value.into());
        self
    }

    #[cfg(test)]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

/// Ordered stages for one asset category. See the module docs for ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TransformChain(Vec<TransformStage>);

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `stage` after the existing ones, so it is applied before them.
    pub fn push(&mut self, stage: TransformStage) {
        self.0.push(stage);
    }

    /// Builder form of [`push`](Self::push).
    pub fn then(mut self, stage: TransformStage) -> Self {
        self.push(stage);
        self
    }

    /// Stages in declaration order (outermost first).
    pub fn declared(&self) -> std::slice::Iter<'_, TransformStage> {
        self.0.iter()
    }

    /// Stages in the order the engine runs them (innermost first).
    pub fn applied(&self) -> std::iter::Rev<std::slice::Iter<'_, TransformStage>> {
        self.declared().rev()
    }

    /// Loader names in declaration order.
    #[cfg(test)]
    pub fn loaders(&self) -> Vec<&str> {
        self.declared().map(|s| s.loader.as_str()).collect()
    }

    #[cfg(test)]
    pub fn contains(&self, loader: &str) -> bool {
        self.declared().any(|s| s.loader == loader)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<TransformStage> for TransformChain {
    fn from_iter<I: IntoIterator<Item = TransformStage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
impl std::ops::Index<usize> for TransformChain {
    type Output = TransformStage;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
