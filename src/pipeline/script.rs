//! Script transform chain.

use super::stage::{TransformChain, TransformStage, loader};
use crate::core::BuildPolicy;
use serde_json::Value;

/// Build the script chain.
///
/// Declared as `transpile [-> lint]`. With lint present it is applied first,
/// so lint (and its in-place autofix) sees untranspiled source.
pub fn build_script_chain(policy: &BuildPolicy, preset: &str) -> TransformChain {
    let mut chain = TransformChain::new().then(
        TransformStage::new(loader::BABEL)
            .with_option("presets", Value::Array(vec![preset.into()])),
    );

    if policy.lint_autofix {
        chain.push(TransformStage::new(loader::ESLINT).with_option("fix", true));
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;
    use serde_json::json;

    const PRESET: &str = "@babel/preset-env";

    #[test]
    fn test_lint_only_in_development() {
        let dev = build_script_chain(&Mode::Development.policy(), PRESET);
        let prod = build_script_chain(&Mode::Production.policy(), PRESET);
        assert!(dev.contains(loader::ESLINT));
        assert!(!prod.contains(loader::ESLINT));
    }

    #[test]
    fn test_transpile_always_present() {
        for mode in [Mode::Development, Mode::Production] {
            let chain = build_script_chain(&mode.policy(), PRESET);
            assert_eq!(chain[0].loader, loader::BABEL);
            assert_eq!(chain[0].option("presets"), Some(&json!([PRESET])));
        }
    }

    #[test]
    fn test_lint_runs_before_transpile() {
        let chain = build_script_chain(&Mode::Development.policy(), PRESET);
        let applied: Vec<_> = chain.applied().map(|s| s.loader.as_str()).collect();
        assert_eq!(applied, [loader::ESLINT, loader::BABEL]);
        assert_eq!(chain[1].option("fix"), Some(&json!(true)));
    }
}
