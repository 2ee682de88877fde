//! # superinit-lint-parse
//!
//! Front ends turning files into the superinit-lint tree model.
//!
//! | Extractor | Files | Output |
//! |-----------|-------|--------|
//! | [`LayoutXmlExtractor`] | `res/layout*/*.xml` | [`Element`](superinit_lint_core::Element) tree |
//! | [`KotlinExtractor`] | `*.kt`, `*.kts` | [`SourceFile`](superinit_lint_core::SourceFile) |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod kotlin;
mod layout;

pub use kotlin::KotlinExtractor;
pub use layout::LayoutXmlExtractor;

use superinit_lint_core::ExtractorBox;

/// Returns every built-in extractor.
#[must_use]
pub fn default_extractors() -> Vec<ExtractorBox> {
    vec![
        Box::new(LayoutXmlExtractor::new()),
        Box::new(KotlinExtractor::new()),
    ]
}
