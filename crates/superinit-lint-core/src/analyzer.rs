//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::extractor::{ExtractorBox, ParsedDocument};
use crate::rule::{LayoutRule, LayoutRuleBox, SourceRule, SourceRuleBox};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the project tree.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// A file could not be parsed by its front end.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    layout_rules: Vec<LayoutRuleBox>,
    source_rules: Vec<SourceRuleBox>,
    extractors: Vec<ExtractorBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a layout rule.
    #[must_use]
    pub fn layout_rule<R: LayoutRule + 'static>(mut self, rule: R) -> Self {
        self.layout_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed layout rule.
    #[must_use]
    pub fn layout_rule_box(mut self, rule: LayoutRuleBox) -> Self {
        self.layout_rules.push(rule);
        self
    }

    /// Adds a source rule.
    #[must_use]
    pub fn source_rule<R: SourceRule + 'static>(mut self, rule: R) -> Self {
        self.source_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed source rule.
    #[must_use]
    pub fn source_rule_box(mut self, rule: SourceRuleBox) -> Self {
        self.source_rules.push(rule);
        self
    }

    /// Registers a front end.
    #[must_use]
    pub fn extractor(mut self, extractor: ExtractorBox) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined for a
    /// relative root.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let config = self.config.unwrap_or_default();
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        Ok(Analyzer {
            root,
            layout_rules: self.layout_rules,
            source_rules: self.source_rules,
            extractors: self.extractors,
            exclude_patterns,
            config,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    layout_rules: Vec<LayoutRuleBox>,
    source_rules: Vec<SourceRuleBox>,
    extractors: Vec<ExtractorBox>,
    exclude_patterns: Vec<String>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.layout_rules.len() + self.source_rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or if a file fails
    /// to parse or decode as UTF-8 while `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            let outcome =
                read_source(file_path).and_then(|content| self.analyze_source(file_path, &content));
            match outcome {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.config.analyzer.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Runs every applicable rule over one file's contents.
    ///
    /// Files no registered front end accepts yield no violations.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Parse`] if the front end rejects the contents.
    pub fn analyze_source(&self, path: &Path, content: &str) -> Result<Vec<Violation>, AnalyzerError> {
        let Some(extractor) = self.extractors.iter().find(|e| e.accepts(path)) else {
            debug!("No front end for {}", path.display());
            return Ok(Vec::new());
        };

        debug!("Analyzing {} as {}", path.display(), extractor.language_id());

        let document = extractor
            .extract(content)
            .map_err(|e| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let ctx = FileContext::new(path, content, &self.root);
        let mut violations = Vec::new();

        match &document {
            ParsedDocument::Layout(root) => {
                for rule in &self.layout_rules {
                    if !self.config.is_rule_enabled(rule.name(), rule.code()) {
                        debug!("Skipping disabled rule: {}", rule.name());
                        continue;
                    }
                    let found = rule.check_layout(&ctx, root);
                    violations.extend(self.apply_severity_override(rule.name(), rule.code(), found));
                }
            }
            ParsedDocument::Source(file) => {
                for rule in &self.source_rules {
                    if !self.config.is_rule_enabled(rule.name(), rule.code()) {
                        debug!("Skipping disabled rule: {}", rule.name());
                        continue;
                    }
                    let found = rule.check_source(&ctx, file);
                    violations.extend(self.apply_severity_override(rule.name(), rule.code(), found));
                }
            }
        }

        Ok(violations)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        rule_code: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name, rule_code) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers all files some front end accepts.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !self.extractors.iter().any(|e| e.accepts(path)) {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.exclude_patterns.iter().any(|pattern| {
            if glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&path_str)) {
                return true;
            }

            // Also check as substring for patterns like "**/build/**"
            let normalized = pattern.replace("**", "");
            !normalized.is_empty() && path_str.contains(&normalized)
        })
    }
}

/// Reads a file as UTF-8. Undecodable content is reported as a parse error.
fn read_source(path: &Path) -> Result<String, AnalyzerError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        _ => AnalyzerError::Io(e),
    })
}
