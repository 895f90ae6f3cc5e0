//! `inspect` command: human-readable view of the tree.
//!
//! Rule stages are listed in the order the engine applies them, which is
//! the reverse of how they appear in the JSON.

use crate::config::ProjectConfig;
use crate::core::Mode;
use crate::pipeline::{ConfigurationTree, RuleEntry, assemble, rule_for};
use anyhow::Result;
use std::fmt::Write;

pub fn run_inspect(project: &ProjectConfig, mode: Mode, paths: &[String]) -> Result<()> {
    let tree = assemble(project, mode);
    print!("{}", render_report(&tree, paths)?);
    Ok(())
}

/// Build the report text.
pub fn render_report(tree: &ConfigurationTree, paths: &[String]) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "mode        {}", tree.mode)?;
    writeln!(
        out,
        "output      {} -> {}",
        tree.output.filename,
        tree.output.path.display()
    )?;
    let devtool = if tree.devtool.is_empty() {
        "(none)"
    } else {
        tree.devtool.as_str()
    };
    writeln!(out, "devtool     {devtool}")?;

    let minimizers: Vec<_> = tree
        .optimization
        .minimizers
        .iter()
        .map(|m| m.plugin.name())
        .collect();
    writeln!(out, "minimizers  {}", join_or_none(&minimizers))?;

    let plugins: Vec<_> = tree.plugins.iter().map(|p| p.plugin.name()).collect();
    writeln!(out, "plugins     {}", join_or_none(&plugins))?;

    writeln!(out, "rules (applied order)")?;
    for rule in &tree.module.rules {
        let stages: Vec<_> = rule.chain.applied().map(|s| s.loader.as_str()).collect();
        let exclude = rule
            .exclude
            .as_ref()
            .map(|e| format!(" (except {e})"))
            .unwrap_or_default();
        writeln!(
            out,
            "  {:<11} {}{}: {}",
            rule.category.name(),
            rule.test,
            exclude,
            stages.join(" -> ")
        )?;
    }

    if !paths.is_empty() {
        writeln!(out, "files")?;
        for path in paths {
            let handled = rule_for(&tree.module.rules, path)
                .map(|rule| rule.category.name())
                .unwrap_or_else(|| unhandled_reason(&tree.module.rules, path));
            writeln!(out, "  {path} -> {handled}")?;
        }
    }

    Ok(out)
}

/// Why no rule picked up `path`: a test matched but its exclude did too.
fn unhandled_reason(rules: &[RuleEntry], path: &str) -> &'static str {
    if rules.iter().any(|rule| rule.test.matches(path)) {
        "excluded"
    } else {
        "no rule"
    }
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "(none)".to_owned()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(mode: Mode, paths: &[&str]) -> String {
        let tree = assemble(&ProjectConfig::default(), mode);
        let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        render_report(&tree, &paths).unwrap()
    }

    #[test]
    fn test_development_report() {
        let report = report(Mode::Development, &[]);
        assert!(report.contains("mode        development"));
        assert!(report.contains("devtool     source-map"));
        assert!(report.contains("minimizers  (none)"));
        assert!(report.contains(
            "plugins     clean-output, copy-static, style-extract, sprite-extract, manifest"
        ));
        assert!(report.contains("eslint-loader -> babel-loader"));
        assert!(!report.contains("files"));
    }

    #[test]
    fn test_production_report() {
        let report = report(Mode::Production, &[]);
        assert!(report.contains("output      [name].[hash].js"));
        assert!(report.contains("devtool     (none)"));
        assert!(report.contains("minimizers  css-minimizer, script-minimizer"));
        assert!(report.contains("sass-loader -> css-loader -> mini-css-extract-plugin/loader"));
        assert!(!report.contains("eslint-loader"));
    }

    #[test]
    fn test_file_lookup() {
        let report = report(
            Mode::Production,
            &["js/main.js", "node_modules/x/y.js", "icons/a.svg", "notes.txt"],
        );
        assert!(report.contains("  js/main.js -> script"));
        assert!(report.contains("  node_modules/x/y.js -> excluded"));
        assert!(report.contains("  icons/a.svg -> icon"));
        assert!(report.contains("  notes.txt -> no rule"));
    }

    #[test]
    fn test_uppercase_extension_is_not_excluded() {
        let report = report(Mode::Development, &["img/LOGO.PNG", "node_modules/x/Y.JS"]);
        assert!(report.contains("  img/LOGO.PNG -> no rule"));
        assert!(report.contains("  node_modules/x/Y.JS -> no rule"));
        assert!(!report.contains("excluded"));
    }
}
