//! Integration test: whole project walk with config-built rules.
//!
//! Uses the Android project under `tests/fixtures/sample/`.

use std::path::{Path, PathBuf};

use superinit_lint_core::{Analyzer, Config, Severity};
use superinit_lint_parse::default_extractors;
use superinit_lint_rules::rules_from_config;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample")
}

fn analyze(config: Config) -> superinit_lint_core::LintResult {
    let rules = rules_from_config(&config);
    let mut builder = Analyzer::builder().root(fixture_root()).config(config);
    for extractor in default_extractors() {
        builder = builder.extractor(extractor);
    }
    for rule in rules.layout {
        builder = builder.layout_rule_box(rule);
    }
    for rule in rules.source {
        builder = builder.source_rule_box(rule);
    }
    builder
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed")
}

#[test]
fn default_config_finds_layout_and_dto_issues() {
    let result = analyze(Config::default());

    // build/ is excluded by default
    assert_eq!(result.files_checked, 4);

    let found: Vec<(String, usize, &str)> = result
        .violations
        .iter()
        .map(|v| {
            (
                v.location.file.display().to_string(),
                v.location.line,
                v.code.as_str(),
            )
        })
        .collect();

    let layout = Path::new("app/src/main/res/layout/activity_main.xml");
    let dto = Path::new("app/src/main/java/com/superinit_lint_sample/data/dto/api/UserDto.kt");
    assert_eq!(
        found,
        vec![
            (dto.display().to_string(), 9, "DtoDefaultValueDetector"),
            (dto.display().to_string(), 11, "DtoDefaultValueDetector"),
            (layout.display().to_string(), 15, "MissingConstraints"),
        ]
    );
    assert!(result.has_errors());
}

#[test]
fn config_options_flow_into_rules() {
    let config = Config::parse(
        r#"
[rules.missing-constraints]
enabled = false

[rules.dto-default-value]
severity = "warning"
package_contains = "ui"
annotations = ["Serializable"]
"#,
    )
    .expect("config should parse");

    let result = analyze(config);

    assert!(result.violations.is_empty());
    assert!(!result.has_errors());
}

#[test]
fn severity_override_applies() {
    let config = Config::parse(
        r#"
[rules.DtoDefaultValueDetector]
severity = "warning"
"#,
    )
    .expect("config should parse");

    let result = analyze(config);
    let (errors, warnings, _) = result.count_by_severity();

    assert_eq!((errors, warnings), (1, 2));
    assert!(result
        .violations
        .iter()
        .filter(|v| v.code == "DtoDefaultValueDetector")
        .all(|v| v.severity == Severity::Warning));
}
