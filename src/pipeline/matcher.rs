//! File matchers for rule `test` / `exclude` fields.
//!
//! Matchers serialize to the regex source the engine compiles:
//!
//! | Matcher                           | Emitted            |
//! |-----------------------------------|--------------------|
//! | `Extensions(["css"])`             | `\.css$`           |
//! | `Extensions(["png","jpg","gif"])` | `\.(png|jpg|gif)$` |
//! | `PathSegment("node_modules")`     | `node_modules`     |

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Match files ending in one of these extensions (without the dot).
    Extensions(Vec<String>),
    /// Match any path containing this literal text.
    PathSegment(String),
}

impl Matcher {
    pub fn extensions<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Extensions(exts.into_iter().map(Into::into).collect())
    }

    pub fn path_segment(segment: impl Into<String>) -> Self {
        Self::PathSegment(segment.into())
    }

    /// Regex source emitted into the configuration tree.
    pub fn source(&self) -> String {
        match self {
            Self::Extensions(exts) => {
                let escaped: Vec<_> = exts.iter().map(|e| regex::escape(e)).collect();
                match escaped.as_slice() {
                    [single] => format!(r"\.{single}$"),
                    _ => format!(r"\.({})$", escaped.join("|")),
                }
            }
            Self::PathSegment(segment) => regex::escape(segment),
        }
    }

    /// Check a path against the emitted regex.
    pub fn matches(&self, path: &str) -> bool {
        Regex::new(&self.source()).is_ok_and(|re| re.is_match(path))
    }

    /// Extensions covered, if this is an extension matcher.
    pub fn extension_list(&self) -> Option<&[String]> {
        match self {
            Self::Extensions(exts) => Some(exts),
            Self::PathSegment(_) => None,
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source())
    }
}

impl Serialize for Matcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source())
    }
}
