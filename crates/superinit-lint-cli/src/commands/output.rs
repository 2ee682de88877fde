//! Shared output formatting for lint results.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use superinit_lint_core::{LintResult, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` resolves the relative violation paths for formats that quote
/// source lines.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Lint => print!("{}", render_lint(result, &read_sources(result, root))),
        OutputFormat::Pretty => print_pretty(result, &read_sources(result, root)),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    for violation in &result.violations {
        println!("{}", violation.format());
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
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

/// Contents of every file with a violation, keyed by relative path.
fn read_sources(result: &LintResult, root: &Path) -> HashMap<PathBuf, String> {
    let mut sources = HashMap::new();
    for violation in &result.violations {
        let file = &violation.location.file;
        if sources.contains_key(file) {
            continue;
        }
        match std::fs::read_to_string(root.join(file)) {
            Ok(content) => {
                sources.insert(file.clone(), content);
            }
            Err(e) => tracing::debug!("Cannot quote {}: {}", file.display(), e),
        }
    }
    sources
}

fn render_lint(result: &LintResult, sources: &HashMap<PathBuf, String>) -> String {
    result.format_lint_report(|file| sources.get(file).map(String::as_str))
}

fn print_pretty(result: &LintResult, sources: &HashMap<PathBuf, String>) {
    for violation in &result.violations {
        let content = sources.get(&violation.location.file).map_or("", String::as_str);
        let report = miette::Report::new(ViolationDiagnostic::new(violation, content));
        println!("{report:?}");
    }

    let (errors, warnings, _) = result.count_by_severity();
    println!("{errors} errors, {warnings} warnings");
}
