//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::tree::TextRange;
use crate::types::Location;

/// Context provided to rules for a single file.
///
/// Maps byte ranges coming from the parsed tree to reportable locations.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            path,
            content,
            relative_path,
            line_starts,
        }
    }

    /// Returns the 1-indexed line and column of a byte offset.
    ///
    /// Columns count characters, not bytes. Offsets past the end clamp to the
    /// end of the file.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        let column = self
            .content
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        (line_idx + 1, column + 1)
    }

    /// Builds a location for a byte range.
    #[must_use]
    pub fn location(&self, range: TextRange) -> Location {
        let (line, column) = self.line_col(range.start);
        Location::new(self.relative_path.clone(), line, column).with_span(range.start, range.len())
    }

    /// Returns the text of a 1-indexed line without its terminator.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        line_text(self.content, line)
    }
}

/// Returns the text of a 1-indexed line of `content`, without `\r\n`/`\n`.
#[must_use]
pub fn line_text(content: &str, line: usize) -> Option<&str> {
    content.lines().nth(line.checked_sub(1)?)
}
