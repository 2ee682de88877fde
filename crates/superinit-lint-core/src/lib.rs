//! # superinit-lint-core
//!
//! Core model for the superinit lint rules.
//!
//! This crate provides the types every other crate of the workspace shares:
//!
//! - [`Node`] / [`Element`] for parsed layout markup
//! - [`Declaration`] / [`ClassDeclaration`] for parsed class declarations
//! - [`LayoutRule`] and [`SourceRule`] traits
//! - [`Violation`] and [`Replacement`] for findings and their rewrites
//! - [`Analyzer`] for running rules over a project tree
//!
//! ## Example
//!
//! ```ignore
//! use superinit_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./app")
//!     .extractor(Box::new(LayoutXmlExtractor::new()))
//!     .layout_rule(MissingConstraints::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod declaration;
mod extractor;
mod fixer;
mod rule;
mod tree;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use declaration::{Annotation, ClassDeclaration, Declaration, Parameter, SourceFile};
pub use extractor::{ExtractError, Extractor, ExtractorBox, ParsedDocument};
pub use fixer::{apply_replacements, FixOutcome};
pub use rule::{LayoutRule, LayoutRuleBox, SourceRule, SourceRuleBox};
pub use tree::{Attribute, Element, Node, TextRange, ANDROID_URI, AUTO_URI, TOOLS_URI};
pub use types::{LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic};
