//! `[entry]` section configuration.
//!
//! Maps chunk names to their entry modules (relative to `paths.context`).
//! Chunks keep the order they are written in.
//!
//! # Example
//!
//! ```toml
//! [entry]
//! main = ["./js/main.js"]
//! admin = ["./js/admin.js", "./js/charts.js"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named bundle and the modules it starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChunk {
    pub name: String,
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryConfig {
    pub chunks: Vec<EntryChunk>,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            chunks: vec![EntryChunk {
                name: "main".to_owned(),
                modules: vec!["./js/main.js".to_owned()],
            }],
        }
    }
}

impl EntryConfig {
    const FIELD: FieldPath = FieldPath::new("entry");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.chunks.is_empty() {
            diag.error_with_hint(
                Self::FIELD,
                "no entry chunks configured",
                "e.g. main = [\"./js/main.js\"]",
            );
            return;
        }

        for chunk in &self.chunks {
            if chunk.name.trim().is_empty() {
                diag.error(Self::FIELD, "entry chunk name is empty");
            }
            if chunk.modules.is_empty() {
                diag.error(
                    Self::FIELD,
                    format!("entry chunk `{}` has no modules", chunk.name),
                );
            }
        }
    }
}

impl Serialize for EntryConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.chunks.len()))?;
        for chunk in &self.chunks {
            map.serialize_entry(&chunk.name, &chunk.modules)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EntryConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChunksVisitor;

        impl<'de> Visitor<'de> for ChunksVisitor {
            type Value = EntryConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of chunk names to module lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut chunks = Vec::new();
                while let Some((name, modules)) = access.next_entry()? {
                    chunks.push(EntryChunk { name, modules });
                }
                Ok(EntryConfig { chunks })
            }
        }

        deserializer.deserialize_map(ChunksVisitor)
    }
}
