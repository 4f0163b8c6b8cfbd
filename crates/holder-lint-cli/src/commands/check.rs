//! Check command implementation.

use anyhow::{Context, Result};
use holder_lint_core::{Analyzer, RuleBox};
use holder_lint_rules::{all_rules, rule_by_name};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;
    let fail_on = config.fail_threshold();
    let root = source.analysis_root(path, config.analyzer.root.as_deref());

    let mut builder = Analyzer::builder()
        .root(root)
        .config(config)
        .excludes(exclude);

    let rules_to_add = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names)
        }
        None => all_rules(),
    };

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rule(s)",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Looks up the named rules, keeping one instance per rule code.
fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut selected: Vec<RuleBox> = Vec::new();

    for name in names.iter().filter(|name| !name.is_empty()) {
        let Some(rule) = rule_by_name(name) else {
            tracing::warn!("Unknown rule: {}", name);
            continue;
        };
        if selected.iter().any(|r| r.code() == rule.code()) {
            tracing::debug!("Rule {} selected more than once", rule.name());
            continue;
        }
        selected.push(rule);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_names_and_codes() {
        assert_eq!(filter_rules(&["viewholder-layout-doc"]).len(), 1);
        assert_eq!(filter_rules(&["vh001"]).len(), 1);
    }

    #[test]
    fn filter_keeps_one_instance_per_rule() {
        let rules = filter_rules(&["viewholder-layout-doc", "VH001", "viewholder-layout-doc"]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].code(), "VH001");
    }

    #[test]
    fn rule_named_twice_reports_once_per_class() {
        let mut builder = Analyzer::builder().root(".");
        for rule in filter_rules(&["viewholder-layout-doc", "VH001"]) {
            builder = builder.rule_box(rule);
        }
        let analyzer = builder.build().unwrap();

        let violations = analyzer
            .check_source(
                Path::new("FooHolder.java"),
                "class FooHolder extends RecyclerViewHolder { }\n",
            )
            .unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 1);
    }

    #[test]
    fn filter_skips_unknown_and_empty() {
        assert!(filter_rules(&["no-such-rule", ""]).is_empty());
    }
}
