//! Applies rewrite edits to file contents.

use crate::types::Replacement;

/// Outcome of applying a batch of replacements to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The rewritten contents.
    pub content: String,
    /// Number of replacements applied.
    pub applied: usize,
    /// Replacements dropped because they overlapped an earlier one or did not
    /// map onto the contents.
    pub skipped: usize,
}

/// Applies `replacements` to `content`.
///
/// Replacements are ordered by offset; one that overlaps an already accepted
/// replacement, runs past the end, or splits a character is skipped.
#[must_use]
pub fn apply_replacements(content: &str, replacements: &[&Replacement]) -> FixOutcome {
    let mut ordered: Vec<&Replacement> = replacements.to_vec();
    ordered.sort_by_key(|r| (r.location.offset, r.location.length));

    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut applied = 0;
    let mut skipped = 0;

    for r in ordered {
        let start = r.location.offset;
        let end = start + r.location.length;
        let fits = start >= cursor
            && end <= content.len()
            && content.is_char_boundary(start)
            && content.is_char_boundary(end);
        if !fits {
            tracing::debug!(
                "Skipping replacement at {}..{} in {}",
                start,
                end,
                r.location.file.display()
            );
            skipped += 1;
            continue;
        }

        output.push_str(&content[cursor..start]);
        output.push_str(&r.new_text);
        cursor = end;
        applied += 1;
    }

    output.push_str(&content[cursor..]);

    FixOutcome {
        content: output,
        applied,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use std::path::PathBuf;

    fn repl(offset: usize, length: usize, text: &str) -> Replacement {
        Replacement::new(
            Location::new(PathBuf::from("a.kt"), 1, 1).with_span(offset, length),
            text,
        )
    }

    #[test]
    fn applies_in_offset_order() {
        let content = "(val a: Int, val b: Long)";
        let second = repl(13, 11, "val b: Long = 0L");
        let first = repl(1, 10, "val a: Int = 0");
        let outcome = apply_replacements(content, &[&second, &first]);
        assert_eq!(outcome.content, "(val a: Int = 0, val b: Long = 0L)");
        assert_eq!((outcome.applied, outcome.skipped), (2, 0));
    }

    #[test]
    fn skips_overlapping_and_out_of_bounds() {
        let content = "abcdef";
        let a = repl(0, 3, "X");
        let overlapping = repl(2, 2, "Y");
        let past_end = repl(5, 10, "Z");
        let outcome = apply_replacements(content, &[&a, &overlapping, &past_end]);
        assert_eq!(outcome.content, "Xdef");
        assert_eq!((outcome.applied, outcome.skipped), (1, 2));
    }

    #[test]
    fn no_replacements_keeps_content() {
        let outcome = apply_replacements("unchanged", &[]);
        assert_eq!(outcome.content, "unchanged");
        assert_eq!(outcome.applied, 0);
    }
}
