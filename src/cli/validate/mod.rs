//! `validate` command.
//!
//! The assembler never checks that rule tests are mutually exclusive; this
//! command does, for both modes, and also checks that the configured layout
//! exists on disk.

mod report;

use anyhow::{Result, bail};

use crate::config::ProjectConfig;
use crate::core::Mode;
use crate::log;
use crate::pipeline::{build_rules, find_overlaps};
use crate::utils::plural_count;

use report::ValidationReport;

pub fn validate_project(project: &ProjectConfig) -> Result<()> {
    match &project.config_path {
        Some(path) => log!("validate"; "checking {}", path.display()),
        None => log!("validate"; "checking default layout in {}", project.root.display()),
    }

    let report = check_project(project);
    report.print();

    if report.is_clean() {
        log!("validate"; "{}", report);
        Ok(())
    } else {
        eprintln!();
        log!("validate"; "{}", report);
        bail!(
            "validation failed: {}",
            plural_count(report.error_count(), "problem")
        )
    }
}

/// Run every check without printing.
fn check_project(project: &ProjectConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_rules(project, &mut report);
    check_layout(project, &mut report);
    report
}

fn check_rules(project: &ProjectConfig, report: &mut ValidationReport) {
    for mode in [Mode::Development, Mode::Production] {
        let rules = build_rules(&mode.policy(), project);
        for overlap in find_overlaps(&rules) {
            report.add_rule(
                mode.to_string(),
                format!("{}/{}", overlap.first.name(), overlap.second.name()),
                format!("both match .{}", overlap.extensions.join(", .")),
            );
        }
    }
}

fn check_layout(project: &ProjectConfig, report: &mut ValidationReport) {
    let context = &project.paths.context;
    if !context.is_dir() {
        report.add_layout(
            "paths.context".into(),
            context.display().to_string(),
            "directory not found".into(),
        );
        return;
    }

    for chunk in &project.entry.chunks {
        for module in &chunk.modules {
            if !context.join(module).is_file() {
                report.add_layout(
                    format!("entry.{}", chunk.name),
                    module.clone(),
                    "module not found".into(),
                );
            }
        }
    }

    for (name, target) in &project.resolve.alias {
        if !target.exists() {
            report.add_layout(
                format!("resolve.alias.{name}"),
                target.display().to_string(),
                "path not found".into(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project_in(dir: &Path) -> ProjectConfig {
        ProjectConfig::load_from(Path::new("kiln-absent-91c2.toml"), dir).unwrap()
    }

    #[test]
    fn test_complete_layout_passes() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/dev/js/modules")).unwrap();
        fs::write(dir.path().join("assets/dev/js/main.js"), "").unwrap();

        let report = check_project(&project_in(dir.path()));
        assert!(report.is_clean(), "{:?}", report);
        assert!(validate_project(&project_in(dir.path())).is_ok());
    }

    #[test]
    fn test_missing_context() {
        let dir = TempDir::new().unwrap();
        let report = check_project(&project_in(dir.path()));
        assert_eq!(report.error_count(), 1);
        assert!(report.layout.contains_key("paths.context"));
    }

    #[test]
    fn test_missing_entry_module_and_alias() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/dev")).unwrap();

        let report = check_project(&project_in(dir.path()));
        assert_eq!(report.layout["entry.main"][0].target, "./js/main.js");
        assert!(report.layout.contains_key("resolve.alias.@modules"));
        assert!(report.rules.is_empty());
        assert!(validate_project(&project_in(dir.path())).is_err());
    }
}
