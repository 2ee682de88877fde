//! Front-end extension point.
//!
//! An [`Extractor`] turns raw file contents into the tree model rules work
//! on. Implementations live in `superinit-lint-parse`.

use std::path::Path;

use crate::declaration::SourceFile;
use crate::tree::Element;

/// A parsed document, ready for rule dispatch.
#[derive(Debug, Clone)]
pub enum ParsedDocument<'src> {
    /// Layout markup; holds the document element.
    Layout(Element),
    /// Source code with its class declarations.
    Source(SourceFile<'src>),
}

/// Errors raised by a front end.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Underlying error message.
        message: String,
    },

    /// The input is not well-formed.
    #[error("syntax error: {0}")]
    Syntax(String),
}

/// Trait for file-type specific front ends.
pub trait Extractor: Send + Sync {
    /// Identifier of the handled language (e.g. `"kotlin"`, `"layout-xml"`).
    fn language_id(&self) -> &'static str;

    /// Whether this front end handles the file at `path`.
    fn accepts(&self, path: &Path) -> bool;

    /// Parses `source` into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed at all.
    fn extract<'src>(&self, source: &'src str) -> Result<ParsedDocument<'src>, ExtractError>;
}

/// Type alias for boxed `Extractor` trait objects.
pub type ExtractorBox = Box<dyn Extractor>;
