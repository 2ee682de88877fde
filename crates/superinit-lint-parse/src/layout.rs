//! Android layout XML front end using roxmltree.

use std::path::Path;

use roxmltree::Document;
use superinit_lint_core::{Attribute, Element, ExtractError, Extractor, ParsedDocument, TextRange};

/// Lowers `res/layout*/**.xml` files into an [`Element`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutXmlExtractor;

impl LayoutXmlExtractor {
    /// Creates a new layout extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses `source` into the document element.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Syntax`] if the XML is not well-formed.
    pub fn parse(source: &str) -> Result<Element, ExtractError> {
        let doc = Document::parse(source).map_err(|e| ExtractError::Syntax(e.to_string()))?;
        Ok(lower(doc.root_element(), source))
    }
}

fn lower(node: roxmltree::Node<'_, '_>, source: &str) -> Element {
    let range = node.range();
    let tag = node.tag_name().name();
    let mut element = Element::new(tag)
        .with_range(TextRange::new(range.start, range.end))
        .with_name_range(tag_name_range(source, range.start));

    for attr in node.attributes() {
        let attribute = match attr.namespace() {
            Some(ns) => Attribute::with_namespace(ns, attr.name(), attr.value()),
            None => Attribute::new(attr.name(), attr.value()),
        };
        element = element.with_attribute(attribute);
    }

    for child in node.children().filter(roxmltree::Node::is_element) {
        element = element.with_child(lower(child, source));
    }

    element
}

/// Span of the qualified tag name right after `<`.
fn tag_name_range(source: &str, tag_start: usize) -> TextRange {
    let name_start = tag_start + 1;
    let Some(rest) = source.get(name_start..) else {
        return TextRange::new(tag_start, tag_start);
    };
    let len = rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len());
    TextRange::new(name_start, name_start + len)
}

/// Returns true for `.xml` files inside a `layout` resource directory
/// (`layout`, `layout-land`, `layout-sw600dp`, ...).
fn is_layout_file(path: &Path) -> bool {
    let is_xml = path.extension().is_some_and(|ext| ext == "xml");
    let in_layout_dir = path
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("layout"));
    is_xml && in_layout_dir
}

impl Extractor for LayoutXmlExtractor {
    fn language_id(&self) -> &'static str {
        "layout-xml"
    }

    fn accepts(&self, path: &Path) -> bool {
        is_layout_file(path)
    }

    fn extract<'src>(&self, source: &'src str) -> Result<ParsedDocument<'src>, ExtractError> {
        Self::parse(source).map(ParsedDocument::Layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use superinit_lint_core::{Node, ANDROID_URI, AUTO_URI};

    const LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<CustomConstraintLayout xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res-auto"
    android:layout_width="match_parent">

    <!-- comment -->
    <Button
        android:id="@+id/button1"
        app:layout_constraintTop_toTopOf="parent" />

    <androidx.constraintlayout.widget.Barrier/>
</CustomConstraintLayout>
"#;

    #[test]
    fn lowers_elements_and_namespaces() {
        let root = LayoutXmlExtractor::parse(LAYOUT).unwrap();
        assert_eq!(root.kind(), "CustomConstraintLayout");
        assert_eq!(
            root.attribute_ns(ANDROID_URI, "layout_width").map(|a| a.value.as_str()),
            Some("match_parent")
        );

        let children = root.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].kind(), "Button");
        assert!(children[0].attribute_ns(AUTO_URI, "layout_constraintTop_toTopOf").is_some());
        assert_eq!(children[1].kind(), "androidx.constraintlayout.widget.Barrier");
    }

    #[test]
    fn name_range_covers_tag_name() {
        let root = LayoutXmlExtractor::parse(LAYOUT).unwrap();
        let children = root.children();

        let button = children[0].name_range();
        assert_eq!(button.slice(LAYOUT), Some("Button"));

        let barrier = children[1].name_range();
        assert_eq!(barrier.slice(LAYOUT), Some("androidx.constraintlayout.widget.Barrier"));

        assert!(children[0].range().slice(LAYOUT).is_some_and(|s| s.starts_with("<Button")));
    }

    #[test]
    fn malformed_xml_is_a_syntax_error() {
        let err = LayoutXmlExtractor::parse("<Layout><Button></Layout>").unwrap_err();
        assert!(matches!(err, ExtractError::Syntax(_)));
    }

    #[test]
    fn accepts_layout_directories_only() {
        let extractor = LayoutXmlExtractor::new();
        assert!(extractor.accepts(Path::new("app/src/main/res/layout/main.xml")));
        assert!(extractor.accepts(Path::new("res/layout-land/main.xml")));
        assert!(!extractor.accepts(Path::new("res/values/strings.xml")));
        assert!(!extractor.accepts(Path::new("res/layout/main.kt")));
        assert!(!extractor.accepts(Path::new("AndroidManifest.xml")));
    }
}
