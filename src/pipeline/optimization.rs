//! Minimization policy.

use super::plugins::{PluginKind, PluginSpec};
use crate::core::BuildPolicy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OptimizationSpec {
    /// Minimizers to run. Relative order carries no meaning.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minimizers: Vec<PluginSpec>,
}

/// Empty in development; stylesheet + cached script minimizer in production.
pub fn build_optimization_policy(policy: &BuildPolicy) -> OptimizationSpec {
    if !policy.minimize {
        return OptimizationSpec::default();
    }

    OptimizationSpec {
        minimizers: vec![
            PluginSpec::new(PluginKind::CssMinimizer),
            PluginSpec::new(PluginKind::ScriptMinimizer).with_option("cache", true),
        ],
    }
}
