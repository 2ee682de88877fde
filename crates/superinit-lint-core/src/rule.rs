//! Rule traits for defining lint rules.

use crate::context::FileContext;
use crate::declaration::SourceFile;
use crate::tree::Node;
use crate::types::{Severity, Violation};

/// A rule over layout markup.
///
/// Receives the document root of one layout file and decides itself which
/// elements it applies to.
///
/// # Example
///
/// ```ignore
/// use superinit_lint_core::{FileContext, LayoutRule, Node, Violation};
///
/// pub struct NoEmptyLayout;
///
/// impl LayoutRule for NoEmptyLayout {
///     fn name(&self) -> &'static str { "no-empty-layout" }
///     fn code(&self) -> &'static str { "NoEmptyLayout" }
///
///     fn check_layout(&self, ctx: &FileContext, root: &dyn Node) -> Vec<Violation> {
///         Vec::new()
///     }
/// }
/// ```
pub trait LayoutRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., `missing-constraints`).
    fn name(&self) -> &'static str;

    /// Returns the rule id (e.g., `MissingConstraints`).
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks one layout document and returns any violations found.
    fn check_layout(&self, ctx: &FileContext, root: &dyn Node) -> Vec<Violation>;
}

/// Type alias for boxed `LayoutRule` trait objects.
pub type LayoutRuleBox = Box<dyn LayoutRule>;

/// A rule over class declarations of a source file.
pub trait SourceRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule id.
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks all declarations of one source file.
    fn check_source(&self, ctx: &FileContext, file: &SourceFile<'_>) -> Vec<Violation>;
}

/// Type alias for boxed `SourceRule` trait objects.
pub type SourceRuleBox = Box<dyn SourceRule>;
