//! Rule requiring default values on serializable data class parameters.
//!
//! # Rationale
//!
//! A `@Serializable` class whose constructor parameter has no default throws
//! `MissingFieldException` as soon as the payload omits that field.
//!
//! # Detected Patterns
//!
//! ```kotlin
//! @Serializable
//! data class TestDto(
//!     val result: Int,          // reported, fix: `val result: Int = 0`
//!     val message: String = "",
//! )
//! ```
//!
//! # Configuration
//!
//! - `annotations`: annotation names that mark a class as serializable
//! - `package_contains`: only check files whose package contains this text
//! - `anchor`: `declaration` or `after-annotations` (default)
//!
//! # Suppression
//!
//! - `@Suppress("DtoDefaultValueDetector")` on the class or the parameter

use superinit_lint_core::utils::annotations_suppress;
use superinit_lint_core::{
    Declaration, FileContext, Parameter, RuleConfig, Severity, SourceFile, SourceRule, TextRange,
    Violation,
};

use crate::fix::default_value_fix;
use crate::predicates::{default_literal, lacks_default};
use crate::report::Reporter;

/// Rule id for dto-default-value.
pub const CODE: &str = "DtoDefaultValueDetector";

/// Rule name for dto-default-value.
pub const NAME: &str = "dto-default-value";

/// One-line issue summary.
pub const BRIEF: &str = "Dto의 data class에서 기본 값을 할당해주세요.";

/// Issue explanation attached to every violation.
pub const EXPLANATION: &str = "기본값이 존재하지 않을 경우 MissingFieldException이 발생할수도 있습니다.";

/// Message for every reported parameter.
pub const MESSAGE: &str = "해당 필드의 기본값을 할당해주세요.";

/// Serialization annotations recognized when none are configured.
pub const DEFAULT_ANNOTATIONS: &[&str] = &["Serializable", "kotlinx.serialization.Serializable"];

/// Which range a violation and its fix are attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    /// The whole parameter, leading annotations included.
    Declaration,
    /// The parameter from its first non-whitespace character after the
    /// leading annotations.
    #[default]
    AfterAnnotations,
}

impl Anchor {
    /// Parses a config value (`declaration`, `after-annotations`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "declaration" => Some(Self::Declaration),
            "after-annotations" => Some(Self::AfterAnnotations),
            _ => None,
        }
    }

    /// Range to report for `param`.
    #[must_use]
    pub fn range(self, decl: &dyn Declaration, param: &Parameter) -> TextRange {
        match self {
            Self::Declaration => param.range,
            Self::AfterAnnotations => trimmed_range(decl, param),
        }
    }
}

/// Range of `param` starting after its leading annotations and whitespace.
///
/// Falls back to the full range when the source text is unavailable.
#[must_use]
pub fn trimmed_range(decl: &dyn Declaration, param: &Parameter) -> TextRange {
    let Some(text) = decl.source_text(param.range) else {
        return param.range;
    };
    let skip = param.leading_annotation_len.min(text.len());
    let Some(rest) = text.get(skip..) else {
        return param.range;
    };
    let whitespace = rest.len() - rest.trim_start().len();
    TextRange::new(param.range.start + skip + whitespace, param.range.end)
}

/// Requires default values on parameters of serializable classes.
#[derive(Debug, Clone)]
pub struct DtoDefaultValue {
    /// Annotation names marking a class as serializable.
    pub annotations: Vec<String>,
    /// Only files whose package contains this text are checked.
    pub package_contains: Option<String>,
    /// Range violations are attached to.
    pub anchor: Anchor,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for DtoDefaultValue {
    fn default() -> Self {
        Self::new()
    }
}

impl DtoDefaultValue {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            annotations: DEFAULT_ANNOTATIONS.iter().map(|s| (*s).to_string()).collect(),
            package_contains: None,
            anchor: Anchor::default(),
            severity: Severity::Error,
        }
    }

    /// Replaces the serialization annotation names.
    #[must_use]
    pub fn annotations<I, S>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annotations = annotations.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the rule to packages containing `fragment`.
    #[must_use]
    pub fn package_contains(mut self, fragment: impl Into<String>) -> Self {
        self.package_contains = Some(fragment.into());
        self
    }

    /// Sets the anchor.
    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Builds the rule from its `[rules.dto-default-value]` table.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let mut rule = Self::new();
        let Some(config) = config else {
            return rule;
        };
        if let Some(annotations) = config.get_str_array("annotations") {
            rule = rule.annotations(annotations);
        }
        if let Some(fragment) = config.get_str("package_contains") {
            rule = rule.package_contains(fragment);
        }
        if let Some(value) = config.get_str("anchor") {
            match Anchor::parse(value) {
                Some(anchor) => rule = rule.anchor(anchor),
                None => tracing::warn!("Unknown anchor '{}' for {}, using default", value, NAME),
            }
        }
        if let Some(severity) = config.severity {
            rule = rule.severity(severity);
        }
        rule
    }

    fn is_serializable(&self, decl: &dyn Declaration) -> bool {
        self.annotations.iter().any(|a| decl.has_annotation(a))
    }

    fn accepts_package(&self, package: Option<&str>) -> bool {
        match &self.package_contains {
            Some(fragment) => package.is_some_and(|p| p.contains(fragment.as_str())),
            None => true,
        }
    }

    /// Checks the primary-constructor parameters of one declaration.
    ///
    /// Returns one violation per parameter without a default value, in
    /// declaration order, each carrying a fix that appends the default.
    #[must_use]
    pub fn analyze_declaration(&self, ctx: &FileContext, decl: &dyn Declaration) -> Vec<Violation> {
        if !self.is_serializable(decl) {
            return Vec::new();
        }

        let reporter = Reporter::new(ctx, CODE, NAME, self.severity).explanation(EXPLANATION);

        decl.parameters()
            .iter()
            .filter(|param| lacks_default(param))
            .filter(|param| !annotations_suppress(&param.annotations, CODE))
            .map(|param| {
                let range = self.anchor.range(decl, param);
                let literal = default_literal(param.type_text.as_deref());
                match decl.source_text(range) {
                    Some(original) => reporter.report_with_fix(
                        range,
                        MESSAGE,
                        default_value_fix(ctx, range, original, &literal),
                    ),
                    None => reporter.report(range, MESSAGE),
                }
            })
            .collect()
    }
}

impl SourceRule for DtoDefaultValue {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        BRIEF
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_source(&self, ctx: &FileContext, file: &SourceFile<'_>) -> Vec<Violation> {
        if !self.accepts_package(file.package.as_deref()) {
            tracing::debug!(
                "Skipping {}: package {:?} outside {:?}",
                ctx.relative_path.display(),
                file.package,
                self.package_contains
            );
            return Vec::new();
        }

        file.declarations
            .iter()
            .filter(|decl| !annotations_suppress(decl.annotations(), CODE))
            .flat_map(|decl| self.analyze_declaration(ctx, decl))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use superinit_lint_core::{Annotation, ClassDeclaration};

    const SOURCE: &str = "@Serializable\ndata class TestDto(\n    val result: Int,\n    val message: String = \"\",\n)\n";

    fn range_of(needle: &str) -> TextRange {
        let start = SOURCE.find(needle).unwrap_or_default();
        TextRange::new(start, start + needle.len())
    }

    fn dto(annotation: &str) -> ClassDeclaration<'static> {
        ClassDeclaration::new(SOURCE, "TestDto", TextRange::new(0, SOURCE.len()))
            .with_annotation(Annotation::new(annotation, range_of("@Serializable")))
            .with_parameter(Parameter::new("result", Some("Int"), range_of("val result: Int")))
            .with_parameter(
                Parameter::new("message", Some("String"), range_of("val message: String = \"\"")).with_default(),
            )
    }

    fn ctx() -> FileContext<'static> {
        FileContext::new(Path::new("TestDto.kt"), SOURCE, Path::new(""))
    }

    #[test]
    fn reports_parameter_without_default() {
        let violations = DtoDefaultValue::new().analyze_declaration(&ctx(), &dto("Serializable"));
        assert_eq!(violations.len(), 1);

        let v = &violations[0];
        assert_eq!(v.code, CODE);
        assert_eq!(v.message, MESSAGE);
        assert_eq!((v.location.line, v.location.column), (3, 5));
        assert_eq!(v.fix().map(|r| r.new_text.as_str()), Some("val result: Int = 0"));
        assert_eq!(v.explanation.as_deref(), Some(EXPLANATION));
    }

    #[test]
    fn qualified_annotation_is_accepted() {
        let decl = dto("kotlinx.serialization.Serializable");
        assert_eq!(DtoDefaultValue::new().analyze_declaration(&ctx(), &decl).len(), 1);
    }

    #[test]
    fn other_annotations_are_ignored() {
        let decl = dto("Parcelize");
        assert!(DtoDefaultValue::new().analyze_declaration(&ctx(), &decl).is_empty());
    }

    #[test]
    fn annotation_match_is_literal() {
        let decl = dto("Serializable(with = X::class)");
        assert!(DtoDefaultValue::new().analyze_declaration(&ctx(), &decl).is_empty());
    }

    #[test]
    fn missing_type_defaults_to_null() {
        let decl = ClassDeclaration::new(SOURCE, "TestDto", TextRange::new(0, SOURCE.len()))
            .with_annotation(Annotation::new("Serializable", range_of("@Serializable")))
            .with_parameter(Parameter::new("result", None, range_of("val result")));
        let violations = DtoDefaultValue::new().analyze_declaration(&ctx(), &decl);
        assert_eq!(violations[0].fix().map(|r| r.new_text.as_str()), Some("val result = null"));
    }

    #[test]
    fn parameters_are_reported_in_order() {
        let source = "@Serializable class A(val a: Long, val b: List<String>, val c: Foo)";
        let find = |s: &str| {
            let start = source.find(s).unwrap_or_default();
            TextRange::new(start, start + s.len())
        };
        let decl = ClassDeclaration::new(source, "A", TextRange::new(0, source.len()))
            .with_annotation(Annotation::new("Serializable", find("@Serializable")))
            .with_parameter(Parameter::new("a", Some("Long"), find("val a: Long")))
            .with_parameter(Parameter::new("b", Some("List<String>"), find("val b: List<String>")))
            .with_parameter(Parameter::new("c", Some("Foo"), find("val c: Foo")));
        let ctx = FileContext::new(Path::new("A.kt"), source, Path::new(""));

        let fixes: Vec<String> = DtoDefaultValue::new()
            .analyze_declaration(&ctx, &decl)
            .iter()
            .filter_map(|v| v.fix().map(|r| r.new_text.clone()))
            .collect();
        assert_eq!(
            fixes,
            vec!["val a: Long = 0L", "val b: List<String> = emptyList()", "val c: Foo = Foo()"]
        );
    }

    #[test]
    fn anchor_skips_leading_annotations() {
        let source = "@Serializable class A(@SerialName(\"x\")\n    val x: Int)";
        let param_start = source.find("@SerialName").unwrap_or_default();
        let param_end = source.len() - 1;
        let annotation_end = source.find('\n').unwrap_or_default();
        let decl = ClassDeclaration::new(source, "A", TextRange::new(0, source.len()))
            .with_annotation(Annotation::new("Serializable", TextRange::new(0, 13)))
            .with_parameter(
                Parameter::new("x", Some("Int"), TextRange::new(param_start, param_end))
                    .with_annotation(Annotation::new("SerialName", TextRange::new(param_start, annotation_end))),
            );
        let ctx = FileContext::new(Path::new("A.kt"), source, Path::new(""));

        let trimmed = DtoDefaultValue::new().analyze_declaration(&ctx, &decl);
        assert_eq!(trimmed[0].fix().map(|r| r.new_text.as_str()), Some("val x: Int = 0"));
        assert_eq!(trimmed[0].location.line, 2);

        let full = DtoDefaultValue::new()
            .anchor(Anchor::Declaration)
            .analyze_declaration(&ctx, &decl);
        assert_eq!(
            full[0].fix().map(|r| r.new_text.as_str()),
            Some("@SerialName(\"x\")\n    val x: Int = 0")
        );
    }

    #[test]
    fn suppressed_parameter_is_skipped() {
        let decl = ClassDeclaration::new(SOURCE, "TestDto", TextRange::new(0, SOURCE.len()))
            .with_annotation(Annotation::new("Serializable", range_of("@Serializable")))
            .with_parameter(
                Parameter::new("result", Some("Int"), range_of("val result: Int")).with_annotation(
                    Annotation::new("Suppress", TextRange::new(0, 0)).with_argument(CODE),
                ),
            );
        assert!(DtoDefaultValue::new().analyze_declaration(&ctx(), &decl).is_empty());
    }

    #[test]
    fn package_filter() {
        let rule = DtoDefaultValue::new().package_contains("dto");
        let mut file = SourceFile {
            package: Some("com.example.dto".to_string()),
            declarations: vec![dto("Serializable")],
        };
        assert_eq!(rule.check_source(&ctx(), &file).len(), 1);

        file.package = Some("com.example.model".to_string());
        assert!(rule.check_source(&ctx(), &file).is_empty());

        file.package = None;
        assert!(rule.check_source(&ctx(), &file).is_empty());
        assert_eq!(DtoDefaultValue::new().check_source(&ctx(), &file).len(), 1);
    }

    #[test]
    fn class_level_suppression() {
        let decl = dto("Serializable").with_annotation(
            Annotation::new("SuppressLint", TextRange::new(0, 0)).with_argument("all"),
        );
        let file = SourceFile {
            package: None,
            declarations: vec![decl],
        };
        assert!(DtoDefaultValue::new().check_source(&ctx(), &file).is_empty());
    }

    #[test]
    fn anchor_parsing() {
        assert_eq!(Anchor::parse("declaration"), Some(Anchor::Declaration));
        assert_eq!(Anchor::parse("after-annotations"), Some(Anchor::AfterAnnotations));
        assert_eq!(Anchor::parse("other"), None);
    }
}
