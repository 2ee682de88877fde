//! Turns findings into [`Violation`]s carrying the rule's issue metadata.

use superinit_lint_core::{FileContext, Severity, Suggestion, TextRange, Violation};

/// Issue metadata plus the file being checked.
#[derive(Clone, Copy)]
pub struct Reporter<'a> {
    ctx: &'a FileContext<'a>,
    code: &'static str,
    name: &'static str,
    severity: Severity,
    explanation: Option<&'static str>,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter for one rule and one file.
    #[must_use]
    pub fn new(
        ctx: &'a FileContext<'a>,
        code: &'static str,
        name: &'static str,
        severity: Severity,
    ) -> Self {
        Self {
            ctx,
            code,
            name,
            severity,
            explanation: None,
        }
    }

    /// Attaches the issue explanation to every report.
    #[must_use]
    pub fn explanation(mut self, explanation: &'static str) -> Self {
        self.explanation = Some(explanation);
        self
    }

    /// Reports `message` at `range`.
    #[must_use]
    pub fn report(&self, range: TextRange, message: &str) -> Violation {
        let violation = Violation::new(
            self.code,
            self.name,
            self.severity,
            self.ctx.location(range),
            message,
        );
        match self.explanation {
            Some(explanation) => violation.with_explanation(explanation),
            None => violation,
        }
    }

    /// Reports `message` at `range` with a suggested fix.
    #[must_use]
    pub fn report_with_fix(&self, range: TextRange, message: &str, fix: Suggestion) -> Violation {
        self.report(range, message).with_suggestion(fix)
    }
}
