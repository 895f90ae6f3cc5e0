//! Configuration-tree construction.
//!
//! # Flow
//!
//! ```text
//! Mode ─► BuildPolicy ─┬─► NamingStrategy ─► plugins
//!                      ├─► optimization
//!                      ├─► style / script chains ─► rules
//!                      └────────────────────────────────► assemble ─► ConfigurationTree
//! ```
//!
//! Every builder here is a total, pure function of the policy and the
//! project layout.

mod matcher;
mod naming;
mod optimization;
mod plugins;
mod rules;
mod script;
mod stage;
mod style;
mod tree;

pub use rules::{RuleEntry, build_rules, find_overlaps, rule_for};
pub use tree::{ConfigurationTree, assemble};
