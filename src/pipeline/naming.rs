//! Output filename templates.

use crate::core::BuildPolicy;

/// Placeholder replaced by the asset's logical name.
pub const NAME_PLACEHOLDER: &str = "[name]";
/// Placeholder replaced by the build's content hash.
pub const HASH_PLACEHOLDER: &str = "[hash]";

/// Produces filename templates for emitted assets.
///
/// Development keeps names stable for fast incremental rebuilds; production
/// adds a content hash for cache-busting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingStrategy {
    hashed: bool,
}

impl NamingStrategy {
    pub const fn new(policy: &BuildPolicy) -> Self {
        Self {
            hashed: policy.hash_filenames,
        }
    }

    /// Filename template for an asset category extension (e.g. `"js"`).
    pub fn name_for(&self, ext: &str) -> String {
        if self.hashed {
            format!("{NAME_PLACEHOLDER}.{HASH_PLACEHOLDER}.{ext}")
        } else {
            format!("{NAME_PLACEHOLDER}.{ext}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;

    #[test]
    fn test_development_names() {
        let naming = NamingStrategy::new(&Mode::Development.policy());
        assert_eq!(naming.name_for("js"), "[name].js");
        assert_eq!(naming.name_for("css"), "[name].css");
    }

    #[test]
    fn test_production_names() {
        let naming = NamingStrategy::new(&Mode::Production.policy());
        assert_eq!(naming.name_for("js"), "[name].[hash].js");
        assert_eq!(naming.name_for("css"), "[name].[hash].css");
    }

    #[test]
    fn test_hash_placeholder_follows_mode() {
        for ext in ["js", "css", "svg", "", "weird.ext"] {
            let dev = NamingStrategy::new(&Mode::Development.policy()).name_for(ext);
            let prod = NamingStrategy::new(&Mode::Production.policy()).name_for(ext);
            assert!(!dev.contains(HASH_PLACEHOLDER), "{dev}");
            assert!(prod.contains(HASH_PLACEHOLDER), "{prod}");
            assert!(dev.starts_with(NAME_PLACEHOLDER));
            assert!(prod.starts_with(NAME_PLACEHOLDER));
        }
    }
}
