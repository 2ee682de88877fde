//! Host-native suppression markers.
//!
//! Supports the markers Android lint users already write:
//! ```text
//! <Button tools:ignore="MissingConstraints" />
//! @Suppress("DtoDefaultValueDetector") val id: Int
//! @SuppressLint("DtoDefaultValueDetector") data class Dto(...)
//! ```

use crate::declaration::Annotation;
use crate::tree::{Node, TOOLS_URI};

/// Pseudo rule id that suppresses every rule.
pub const SUPPRESS_ALL: &str = "all";

/// Annotation names that carry rule ids to suppress.
const SUPPRESS_ANNOTATIONS: &[&str] = &["Suppress", "SuppressLint"];

/// Checks a comma separated id list (`"A, B"`) for `code` or `all`.
///
/// Comparison ignores ASCII case.
#[must_use]
pub fn ignore_list_contains(list: &str, code: &str) -> bool {
    list.split(',')
        .map(str::trim)
        .any(|id| id.eq_ignore_ascii_case(code) || id.eq_ignore_ascii_case(SUPPRESS_ALL))
}

/// Returns true if `node` carries a `tools:ignore` naming `code`.
#[must_use]
pub fn node_ignores(node: &dyn Node, code: &str) -> bool {
    node.attribute_ns(TOOLS_URI, "ignore")
        .is_some_and(|a| ignore_list_contains(&a.value, code))
}

/// Returns true if a `@Suppress`/`@SuppressLint` annotation names `code`.
#[must_use]
pub fn annotations_suppress(annotations: &[Annotation], code: &str) -> bool {
    annotations
        .iter()
        .filter(|a| SUPPRESS_ANNOTATIONS.contains(&a.simple_name()))
        .flat_map(|a| a.arguments.iter())
        .any(|arg| ignore_list_contains(arg, code))
}
