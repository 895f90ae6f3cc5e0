//! Rule table: which chain handles which files.
//!
//! | Category   | Test                      | Chain                             |
//! |------------|---------------------------|-----------------------------------|
//! | stylesheet | `\.css$`                  | extract, css                      |
//! | sass       | `\.scss$`                 | extract, css, sass                |
//! | image      | `\.(png|jpg|gif)$`        | file                              |
//! | font       | `\.(ttf|woff|woff2|eot)$` | file                              |
//! | script     | `\.js$` (not deps dir)    | babel [, eslint]                  |
//! | icon       | `\.svg$`                  | svg-sprite, svgo                  |
//!
//! Tests are expected to be mutually exclusive. Nothing here enforces that;
//! [`find_overlaps`] reports violations for the `validate` command.

use super::matcher::Matcher;
use super::script::build_script_chain;
use super::stage::{TransformChain, TransformStage, loader};
use super::style::{build_style_chain, sass_stage};
use crate::config::ProjectConfig;
use crate::core::{AssetCategory, BuildPolicy};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleEntry {
    #[serde(skip)]
    pub category: AssetCategory,
    pub test: Matcher,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Matcher>,
    #[serde(rename = "use")]
    pub chain: TransformChain,
}

impl RuleEntry {
    fn new(category: AssetCategory, chain: TransformChain) -> Self {
        Self {
            category,
            test: Matcher::extensions(category.extensions().iter().copied()),
            exclude: None,
            chain,
        }
    }

    fn excluding(mut self, exclude: Matcher) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Whether this rule picks up `path`.
    pub fn handles(&self, path: &str) -> bool {
        self.test.matches(path) && !self.exclude.as_ref().is_some_and(|e| e.matches(path))
    }
}

/// Build the rule table, one rule per category in [`AssetCategory::ALL`] order.
pub fn build_rules(policy: &BuildPolicy, project: &ProjectConfig) -> Vec<RuleEntry> {
    AssetCategory::ALL
        .into_iter()
        .map(|category| build_rule(category, policy, project))
        .collect()
}

fn build_rule(category: AssetCategory, policy: &BuildPolicy, project: &ProjectConfig) -> RuleEntry {
    match category {
        AssetCategory::Stylesheet => RuleEntry::new(category, build_style_chain(policy, None)),
        AssetCategory::Sass => {
            RuleEntry::new(category, build_style_chain(policy, Some(sass_stage())))
        }
        AssetCategory::Image | AssetCategory::Font => RuleEntry::new(category, file_chain()),
        AssetCategory::Script => {
            RuleEntry::new(category, build_script_chain(policy, &project.script.preset))
                .excluding(Matcher::path_segment(&project.script.exclude))
        }
        AssetCategory::Icon => RuleEntry::new(category, icon_chain(&project.sprite.filename)),
    }
}

fn file_chain() -> TransformChain {
    [TransformStage::new(loader::FILE)].into_iter().collect()
}

fn icon_chain(sprite_filename: &str) -> TransformChain {
    [
        TransformStage::new(loader::SVG_SPRITE)
            .with_option("extract", true)
            .with_option("spriteFilename", sprite_filename),
        TransformStage::new(loader::SVGO),
    ]
    .into_iter()
    .collect()
}

/// First rule that handles `path`.
pub fn rule_for<'a>(rules: &'a [RuleEntry], path: &str) -> Option<&'a RuleEntry> {
    rules.iter().find(|rule| rule.handles(path))
}

/// Two rules claiming the same extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub first: AssetCategory,
    pub second: AssetCategory,
    pub extensions: Vec<String>,
}

/// Report every pair of rules whose extension tests intersect.
///
/// Extensions compare case-sensitively, the same way the emitted tests match.
pub fn find_overlaps(rules: &[RuleEntry]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for (i, a) in rules.iter().enumerate() {
        let Some(a_exts) = a.test.extension_list() else {
            continue;
        };
        for b in &rules[i + 1..] {
            let Some(b_exts) = b.test.extension_list() else {
                continue;
            };
            let shared: Vec<String> = a_exts
                .iter()
                .filter(|ext| b_exts.contains(ext))
                .cloned()
                .collect();
            if !shared.is_empty() {
                overlaps.push(Overlap {
                    first: a.category,
                    second: b.category,
                    extensions: shared,
                });
            }
        }
    }

    overlaps
}
