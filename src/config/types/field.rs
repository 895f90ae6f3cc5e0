//! Config field path used to address diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a `kiln.toml` field, e.g. `"resolve.extensions"`.
///
/// Sections declare theirs as associated constants:
///
/// ```ignore
/// impl PathsConfig {
///     const MANIFEST: FieldPath = FieldPath::new("paths.manifest");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
