//! Default-value rewrites.

use superinit_lint_core::{FileContext, Replacement, Suggestion, TextRange};

/// Builds the edit that appends ` = {literal}` to the text at `range`.
///
/// The edit replaces exactly `range`, so applying it keeps everything around
/// the parameter untouched.
#[must_use]
pub fn default_value_fix(
    ctx: &FileContext<'_>,
    range: TextRange,
    original: &str,
    literal: &str,
) -> Suggestion {
    let replacement = Replacement::new(ctx.location(range), format!("{original} = {literal}"));
    Suggestion::with_fix(format!("기본값 `{literal}` 할당"), replacement)
}
