//! Core types - pure abstractions shared across the codebase.

mod category;
mod mode;

pub use category::AssetCategory;
pub use mode::{BuildPolicy, MODE_ENV, Mode};
