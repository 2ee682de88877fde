//! Check command implementation.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use superinit_lint_core::{apply_replacements, Analyzer, Config, LintResult, Replacement};
use superinit_lint_parse::default_extractors;
use superinit_lint_rules::{rules_from_config, RuleSet};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Flags of the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma separated rule names or ids to run.
    pub rules: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Apply fixes in place.
    pub fix: bool,
}

/// Runs the check command.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    let threshold = config.fail_threshold();

    let analyzer = build_analyzer(path, options, config)?;
    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let mut result = analyzer.analyze().context("Analysis failed")?;

    if options.fix {
        let applied = apply_fixes(analyzer.root(), &result)?;
        if applied > 0 {
            tracing::info!("Applied {} fix(es), re-checking", applied);
            result = analyzer.analyze().context("Analysis after fixing failed")?;
        }
    }

    super::output::print(&result, options.format, analyzer.root())?;

    if result.has_violations_at(threshold) {
        std::process::exit(1);
    }

    Ok(())
}

fn build_analyzer(path: &Path, options: &CheckOptions, config: Config) -> Result<Analyzer> {
    let rules = select_rules(rules_from_config(&config), options.rules.as_deref());

    let mut builder = Analyzer::builder().root(path).config(config);

    for pattern in &options.exclude {
        builder = builder.exclude(pattern.clone());
    }
    for extractor in default_extractors() {
        builder = builder.extractor(extractor);
    }
    for rule in rules.layout {
        builder = builder.layout_rule_box(rule);
    }
    for rule in rules.source {
        builder = builder.source_rule_box(rule);
    }

    builder.build().context("Failed to build analyzer")
}

fn select_rules(rules: RuleSet, filter: Option<&str>) -> RuleSet {
    let Some(filter) = filter else {
        return rules;
    };
    let selected: Vec<String> = filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let known: Vec<(&str, &str)> = rules.infos().iter().map(|i| (i.name, i.code)).collect();
    for name in &selected {
        if !known.iter().any(|(n, c)| *n == name.as_str() || *c == name.as_str()) {
            tracing::warn!("Unknown or disabled rule: {}", name);
        }
    }

    rules.only(&selected)
}

/// Writes every fix back to its file. Returns the number of edits applied.
fn apply_fixes(root: &Path, result: &LintResult) -> Result<usize> {
    let mut by_file: BTreeMap<&Path, Vec<&Replacement>> = BTreeMap::new();
    for replacement in result.violations.iter().filter_map(|v| v.fix()) {
        by_file
            .entry(replacement.location.file.as_path())
            .or_default()
            .push(replacement);
    }

    let mut applied = 0;
    for (relative, replacements) in by_file {
        let file: PathBuf = root.join(relative);
        let content = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        let outcome = apply_replacements(&content, &replacements);
        if outcome.skipped > 0 {
            tracing::warn!(
                "Skipped {} overlapping fix(es) in {}",
                outcome.skipped,
                relative.display()
            );
        }
        if outcome.applied > 0 {
            std::fs::write(&file, outcome.content)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            tracing::debug!("Fixed {} issue(s) in {}", outcome.applied, relative.display());
        }
        applied += outcome.applied;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DTO: &str = "package app.dto\n\n@Serializable\ndata class A(\n    val id: Int,\n    val tags: List<String>,\n)\n";

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("src/app/dto");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("A.kt"), DTO).unwrap();
        tmp
    }

    fn analyze(root: &Path, options: &CheckOptions) -> (Analyzer, LintResult) {
        let analyzer = build_analyzer(root, options, Config::default()).unwrap();
        let result = analyzer.analyze().unwrap();
        (analyzer, result)
    }

    #[test]
    fn fixes_are_written_back() {
        let tmp = project();
        let (analyzer, result) = analyze(tmp.path(), &CheckOptions::default());
        assert_eq!(result.violations.len(), 2);

        let applied = apply_fixes(analyzer.root(), &result).unwrap();
        assert_eq!(applied, 2);

        let fixed = fs::read_to_string(tmp.path().join("src/app/dto/A.kt")).unwrap();
        assert!(fixed.contains("val id: Int = 0,"));
        assert!(fixed.contains("val tags: List<String> = emptyList(),"));
        assert!(analyzer.analyze().unwrap().violations.is_empty());
    }

    #[test]
    fn rule_filter_selects_by_name_or_id() {
        let tmp = project();
        let only_layout = CheckOptions {
            rules: Some("missing-constraints".to_string()),
            ..CheckOptions::default()
        };
        assert!(analyze(tmp.path(), &only_layout).1.violations.is_empty());

        let only_dto = CheckOptions {
            rules: Some("MissingConstraints, DtoDefaultValueDetector".to_string()),
            ..CheckOptions::default()
        };
        assert_eq!(analyze(tmp.path(), &only_dto).1.violations.len(), 2);
    }

    #[test]
    fn excludes_are_honored() {
        let tmp = project();
        let options = CheckOptions {
            exclude: vec!["**/dto/**".to_string()],
            ..CheckOptions::default()
        };
        assert_eq!(analyze(tmp.path(), &options).1.files_checked, 0);
    }
}
