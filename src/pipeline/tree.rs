//! The configuration tree handed to the bundling engine.

use super::naming::NamingStrategy;
use super::optimization::{OptimizationSpec, build_optimization_policy};
use super::plugins::{PluginSpec, build_plugins};
use super::rules::{RuleEntry, build_rules};
use crate::config::{EntryConfig, ProjectConfig};
use crate::core::Mode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root aggregate. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationTree {
    pub context: PathBuf,
    /// The resolved mode, so production trees carry `"production"` rather
    /// than a fixed `"development"`.
    pub mode: Mode,
    /// Entry chunks, in the order the config declares them.
    pub entry: EntryConfig,
    pub output: OutputSpec,
    pub resolve: ResolveSpec,
    pub optimization: OptimizationSpec,
    pub devtool: String,
    pub plugins: Vec<PluginSpec>,
    pub module: ModuleSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpec {
    pub filename: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveSpec {
    pub extensions: Vec<String>,
    pub alias: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSpec {
    pub rules: Vec<RuleEntry>,
}

/// Compose the full tree for `mode` from the project layout.
pub fn assemble(project: &ProjectConfig, mode: Mode) -> ConfigurationTree {
    let policy = mode.policy();
    let naming = NamingStrategy::new(&policy);

    ConfigurationTree {
        context: project.paths.context.clone(),
        mode: policy.mode,
        entry: project.entry.clone(),
        output: OutputSpec {
            filename: naming.name_for("js"),
            path: project.paths.output.clone(),
        },
        resolve: ResolveSpec {
            extensions: project.resolve.extensions.clone(),
            alias: project.resolve.alias.clone(),
        },
        optimization: build_optimization_policy(&policy),
        devtool: policy.devtool.to_owned(),
        plugins: build_plugins(&naming, &project.manifest_path()),
        module: ModuleSpec {
            rules: build_rules(&policy, project),
        },
    }
}
