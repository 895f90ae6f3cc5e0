//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What failed (a rule pair, a path).
    pub target: String,
    /// Why.
    pub reason: String,
}

/// Problems grouped by section, then by subject.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Rule-table conflicts, grouped by mode.
    pub rules: BTreeMap<String, Vec<ValidationError>>,
    /// Missing layout paths, grouped by config field.
    pub layout: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationReport {
    pub fn add_rule(&mut self, mode: String, target: String, reason: String) {
        self.rules
            .entry(mode)
            .or_default()
            .push(ValidationError { target, reason });
    }

    pub fn add_layout(&mut self, field: String, target: String, reason: String) {
        self.layout
            .entry(field)
            .or_default()
            .push(ValidationError { target, reason });
    }

    pub fn error_count(&self) -> usize {
        self.rules.values().chain(self.layout.values()).map(Vec::len).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// Print the full report to stderr (rules -> layout).
    pub fn print(&self) {
        print_section("rules", &self.rules);
        print_section("layout", &self.layout);
    }
}

fn print_section(name: &str, errors: &BTreeMap<String, Vec<ValidationError>>) {
    if errors.is_empty() {
        return;
    }
    eprintln!();

    let error_count: usize = errors.values().map(Vec::len).sum();
    eprintln!(
        "{} {}",
        name.red().bold(),
        format!("({error_count} error{})", plural_s(error_count)).dimmed()
    );

    for (group, errs) in errors {
        eprintln!("{}{}{}", "[".dimmed(), group.cyan(), "]".dimmed());
        for e in errs {
            eprintln!("{} {} {}", "→".red(), e.target, e.reason);
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}
