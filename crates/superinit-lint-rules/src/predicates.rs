//! Pure classification predicates shared by both rules.
//!
//! Nothing here looks at more than one attribute name/value or one type
//! string at a time.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use superinit_lint_core::Parameter;

/// `ConstraintLayout` attributes all start with this prefix.
pub const CONSTRAINT_PREFIX: &str = "layout_constraint";

/// Design-time attributes written by the layout editor.
pub const CREATOR_SUFFIX: &str = "_creator";

/// Tag of the `Flow` virtual layout.
pub const FLOW_TAG: &str = "androidx.constraintlayout.widget.Flow";

/// Tag of the `Barrier` helper.
pub const BARRIER_TAG: &str = "androidx.constraintlayout.widget.Barrier";

/// Helper tags that never need constraints of their own.
pub const EXEMPT_TAGS: &[&str] = &[
    "androidx.constraintlayout.widget.Guideline",
    "androidx.constraintlayout.widget.Group",
    "include",
];

/// Layout marker tags (`<requestFocus/>`, `<tag/>`).
pub const LAYOUT_MARKER_TAGS: &[&str] = &["requestFocus", "tag"];

const HORIZONTAL_SUFFIXES: &[&str] = &["toLeftOf", "toRightOf", "toStartOf", "toEndOf", "toCenterX"];

const VERTICAL_SUFFIXES: &[&str] = &["toTopOf", "toBottomOf", "toCenterY", "toBaselineOf"];

const MATCH_PARENT: &str = "match_parent";

/// Type name → default literal, checked after type arguments are stripped.
const DEFAULT_LITERALS: &[(&str, &str)] = &[
    ("Int", "0"),
    ("Long", "0L"),
    ("Double", "0.0"),
    ("Float", "0f"),
    ("Boolean", "false"),
    ("String", "\"\""),
    ("List", "emptyList()"),
    ("MutableList", "mutableListOf()"),
    ("Set", "emptySet()"),
    ("MutableSet", "mutableSetOf()"),
    ("Map", "emptyMap()"),
    ("MutableMap", "mutableMapOf()"),
    ("JsonElement", "JsonNull"),
];

/// Literal used when a parameter has no declared type.
pub const NULL_LITERAL: &str = "null";

/// Does this attribute satisfy the horizontal axis?
#[must_use]
pub fn is_horizontal_constraint(name: &str, value: &str) -> bool {
    (name == "layout_width" && value == MATCH_PARENT)
        || HORIZONTAL_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Does this attribute satisfy the vertical axis?
#[must_use]
pub fn is_vertical_constraint(name: &str, value: &str) -> bool {
    (name == "layout_height" && value == MATCH_PARENT)
        || VERTICAL_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Only `layout_constraint*` attributes, minus editor `*_creator` ones, take
/// part in the axis scan.
#[must_use]
pub fn is_constraint_attribute(name: &str) -> bool {
    name.starts_with(CONSTRAINT_PREFIX) && !name.ends_with(CREATOR_SUFFIX)
}

/// Attribute listing the ids a helper references.
#[must_use]
pub fn is_referenced_ids(name: &str) -> bool {
    name.contains("constraint_referenced_ids")
}

/// Attribute that gives a `Barrier` its direction.
#[must_use]
pub fn is_barrier_direction(name: &str) -> bool {
    name.ends_with("barrierDirection")
}

/// Tags skipped outright, regardless of attributes.
#[must_use]
pub fn is_exempt_tag(tag: &str) -> bool {
    EXEMPT_TAGS.contains(&tag) || LAYOUT_MARKER_TAGS.contains(&tag)
}

/// `@+id/button1` → `button1`.
#[must_use]
pub fn id_suffix(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

/// Parameters that need a default value.
#[must_use]
pub fn lacks_default(param: &Parameter) -> bool {
    !param.has_default_value
}

fn type_arguments() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new("<.*?>").ok()).as_ref()
}

/// Removes every shortest `<...>` span: `List<String>` → `List`.
#[must_use]
pub fn strip_type_arguments(type_text: &str) -> Cow<'_, str> {
    match type_arguments() {
        Some(re) => re.replace_all(type_text, ""),
        None => Cow::Borrowed(type_text),
    }
}

/// Suggested default literal for a declared type.
///
/// Known types map through a fixed table; any other type becomes a
/// zero-argument constructor call, and a missing type becomes `null`.
#[must_use]
pub fn default_literal(type_text: Option<&str>) -> String {
    let Some(type_text) = type_text else {
        return NULL_LITERAL.to_string();
    };
    let cleaned = strip_type_arguments(type_text);

    DEFAULT_LITERALS
        .iter()
        .find(|(name, _)| *name == cleaned)
        .map_or_else(|| format!("{cleaned}()"), |(_, literal)| (*literal).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_predicates() {
        assert!(is_horizontal_constraint("layout_width", "match_parent"));
        assert!(!is_horizontal_constraint("layout_width", "wrap_content"));
        assert!(is_horizontal_constraint("layout_constraintStart_toStartOf", "parent"));
        assert!(is_horizontal_constraint("layout_constraintLeft_toRightOf", "@id/a"));
        assert!(is_horizontal_constraint("layout_constraintCircle_toCenterX", "x"));
        assert!(!is_horizontal_constraint("layout_constraintTop_toTopOf", "parent"));
    }

    #[test]
    fn vertical_predicates() {
        assert!(is_vertical_constraint("layout_height", "match_parent"));
        assert!(is_vertical_constraint("layout_constraintTop_toTopOf", "parent"));
        assert!(is_vertical_constraint("layout_constraintBaseline_toBaselineOf", "@id/a"));
        assert!(!is_vertical_constraint("layout_constraintEnd_toEndOf", "parent"));
        assert!(!is_vertical_constraint("layout_width", "match_parent"));
    }

    #[test]
    fn constraint_attribute_filter() {
        assert!(is_constraint_attribute("layout_constraintTop_toTopOf"));
        assert!(!is_constraint_attribute("layout_editor_absoluteX"));
        assert!(!is_constraint_attribute("layout_constraintTop_creator"));
        assert!(!is_constraint_attribute("layout_width"));
    }

    #[test]
    fn tag_exemptions() {
        assert!(is_exempt_tag("androidx.constraintlayout.widget.Guideline"));
        assert!(is_exempt_tag("include"));
        assert!(is_exempt_tag("requestFocus"));
        assert!(!is_exempt_tag(BARRIER_TAG));
        assert!(!is_exempt_tag("Button"));
    }

    #[test]
    fn id_suffix_takes_last_segment() {
        assert_eq!(id_suffix("@+id/button1"), "button1");
        assert_eq!(id_suffix("button1"), "button1");
        assert_eq!(id_suffix("@id/"), "");
    }

    #[test]
    fn literal_table() {
        assert_eq!(default_literal(Some("Int")), "0");
        assert_eq!(default_literal(Some("Long")), "0L");
        assert_eq!(default_literal(Some("Double")), "0.0");
        assert_eq!(default_literal(Some("Float")), "0f");
        assert_eq!(default_literal(Some("Boolean")), "false");
        assert_eq!(default_literal(Some("String")), "\"\"");
        assert_eq!(default_literal(Some("MutableList<Int>")), "mutableListOf()");
        assert_eq!(default_literal(Some("Set<Long>")), "emptySet()");
        assert_eq!(default_literal(Some("MutableSet<Long>")), "mutableSetOf()");
        assert_eq!(default_literal(Some("Map<String, Int>")), "emptyMap()");
        assert_eq!(default_literal(Some("MutableMap<String, Int>")), "mutableMapOf()");
        assert_eq!(default_literal(Some("JsonElement")), "JsonNull");
    }

    #[test]
    fn generic_arguments_are_stripped() {
        assert_eq!(default_literal(Some("List<String>")), "emptyList()");
        assert_eq!(default_literal(Some("List<Streaming>")), "emptyList()");
        assert_eq!(strip_type_arguments("Pair<A, B>"), "Pair");
    }

    #[test]
    fn unknown_and_missing_types() {
        assert_eq!(default_literal(Some("Foo")), "Foo()");
        assert_eq!(default_literal(Some("Wrapper<Foo>")), "Wrapper()");
        assert_eq!(default_literal(None), "null");
    }

    #[test]
    fn mapping_is_case_sensitive() {
        assert_eq!(default_literal(Some("int")), "int()");
    }
}
