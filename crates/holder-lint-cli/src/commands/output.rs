//! Shared output formatting for lint results.

use anyhow::Result;
use holder_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use miette::{NamedSource, Report};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the analyzed directory; violation paths are relative to it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Fancy => print_fancy(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(errors, warnings, infos, result.files_checked);
}

fn print_summary(errors: usize, warnings: usize, infos: usize, files: usize) {
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{summary_color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {files} file(s)\x1b[0m"
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

fn print_fancy(result: &LintResult, root: &Path) {
    for violation in &result.violations {
        println!("{:?}", fancy_report(violation, root));
    }

    let (errors, warnings, infos) = result.count_by_severity();
    print_summary(errors, warnings, infos, result.files_checked);
}

/// Builds a miette report, attaching the file's source when it is readable.
fn fancy_report(violation: &Violation, root: &Path) -> Report {
    let report = Report::new(ViolationDiagnostic::from(violation));
    let name = violation.location.file.display().to_string();

    match std::fs::read_to_string(root.join(&violation.location.file)) {
        Ok(source) => report.with_source_code(NamedSource::new(name, source)),
        Err(e) => {
            tracing::debug!("No source for {}: {}", name, e);
            report
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holder_lint_core::Location;
    use std::path::PathBuf;

    #[test]
    fn fancy_report_renders_message_and_snippet() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = "package a;\nclass FooHolder extends RecyclerViewHolder {}\n";
        std::fs::write(tmp.path().join("FooHolder.java"), src).unwrap();

        let violation = Violation::new(
            "VH001",
            "viewholder-layout-doc",
            Severity::Error,
            Location::new(PathBuf::from("FooHolder.java"), 2, 1).with_span(11, 45),
            "missing layout link",
        );

        let rendered = format!("{:?}", fancy_report(&violation, tmp.path()));
        assert!(rendered.contains("[VH001] missing layout link"));
        assert!(rendered.contains("FooHolder.java"));
    }

    #[test]
    fn fancy_report_without_source_still_renders() {
        let violation = Violation::new(
            "VH001",
            "viewholder-layout-doc",
            Severity::Error,
            Location::new(PathBuf::from("Missing.java"), 1, 1),
            "missing layout link",
        );
        let rendered = format!("{:?}", fancy_report(&violation, Path::new("/nonexistent")));
        assert!(rendered.contains("missing layout link"));
    }
}
