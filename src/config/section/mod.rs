//! Configuration section definitions.
//!
//! Each module corresponds to a section in `kiln.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `paths`   | `[paths]`    | Context, output, manifest locations  |
//! | `entry`   | `[entry]`    | Entry chunks                         |
//! | `resolve` | `[resolve]`  | Import extensions and aliases        |
//! | `script`  | `[script]`   | Transpile preset, dependency exclude |
//! | `sprite`  | `[sprite]`   | Icon sprite output                   |

mod entry;
mod paths;
mod resolve;
mod script;
mod sprite;

pub use entry::EntryConfig;
pub use paths::PathsConfig;
pub use resolve::ResolveConfig;
pub use script::ScriptConfig;
pub use sprite::SpriteConfig;
