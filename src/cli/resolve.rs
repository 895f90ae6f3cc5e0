//! `resolve` command: emit the configuration tree.

use crate::config::ProjectConfig;
use crate::core::Mode;
use crate::log;
use crate::pipeline::{ConfigurationTree, assemble};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Assemble the tree and write it to `output`, or stdout.
pub fn run_resolve(
    project: &ProjectConfig,
    mode: Mode,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let tree = assemble(project, mode);
    let json = render(&tree, pretty)?;

    match output {
        Some(path) => {
            write_output(path, &json)?;
            log!("resolve"; "{} config written to {}", mode, path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Serialize the tree.
pub fn render(tree: &ConfigurationTree, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn test_writes_tree_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("build/config.json");

        run_resolve(&ProjectConfig::default(), Mode::Production, Some(&out), true).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["mode"], "production");
        assert_eq!(written["output"]["filename"], "[name].[hash].js");
        assert_eq!(written["optimization"]["minimizers"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_render_compact_and_pretty_agree() {
        let tree = assemble(&ProjectConfig::default(), Mode::Development);
        let compact: Value = serde_json::from_str(&render(&tree, false).unwrap()).unwrap();
        let pretty: Value = serde_json::from_str(&render(&tree, true).unwrap()).unwrap();
        assert_eq!(compact, pretty);
        assert!(!render(&tree, false).unwrap().contains('\n'));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let project = ProjectConfig::default();
        let a = render(&assemble(&project, Mode::Development), false).unwrap();
        let b = render(&assemble(&project, Mode::Development), false).unwrap();
        assert_eq!(a, b);
    }
}
