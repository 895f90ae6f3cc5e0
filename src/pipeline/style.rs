//! Stylesheet transform chain.

use super::stage::{TransformChain, TransformStage, loader};
use crate::core::BuildPolicy;

/// Build the stylesheet chain.
///
/// Declared as `extract -> css [-> preprocessor]`, so the preprocessor sees
/// the source first and extraction wraps everything.
pub fn build_style_chain(
    policy: &BuildPolicy,
    preprocessor: Option<TransformStage>,
) -> TransformChain {
    let mut chain = TransformChain::new()
        .then(
            TransformStage::new(loader::EXTRACT_CSS)
                .with_option("hmr", policy.hot_reload)
                .with_option("reloadAll", true),
        )
        .then(TransformStage::new(loader::CSS));

    if let Some(stage) = preprocessor {
        chain.push(stage);
    }

    chain
}

/// The SCSS preprocessor stage.
pub fn sass_stage() -> TransformStage {
    TransformStage::new(loader::SASS)
}
