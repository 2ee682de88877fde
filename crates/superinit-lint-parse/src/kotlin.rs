//! Kotlin front end using Tree-sitter.

use std::path::Path;

use superinit_lint_core::{
    Annotation, ClassDeclaration, ExtractError, Extractor, Parameter, ParsedDocument, SourceFile,
    TextRange,
};
use tree_sitter::{Language, Node, Parser};

const LANGUAGE_ID: &str = "kotlin";

/// Extracts class declarations, their annotations and primary-constructor
/// parameters from Kotlin source.
pub struct KotlinExtractor {
    language: Language,
}

impl KotlinExtractor {
    /// Creates a new Kotlin extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }

    /// Parses `source` into its package and class declarations.
    ///
    /// Syntax errors inside the file do not fail extraction; Tree-sitter
    /// recovers and the well-formed declarations are still returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or parsing is aborted.
    pub fn parse<'src>(&self, source: &'src str) -> Result<SourceFile<'src>, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractError::Language {
                language: LANGUAGE_ID,
                message: e.to_string(),
            })?;

        let src = source.as_bytes();
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ExtractError::Syntax("parser returned no tree".to_string()))?;
        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("Kotlin source contains syntax errors, extracting what parsed");
        }

        let mut file = SourceFile::default();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            if node.kind() == "package_header" {
                file.package = extract_package(&node, src);
            }
        }
        collect_classes(root, source, &mut file.declarations);

        Ok(file)
    }
}

impl Default for KotlinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
}

fn range(node: &Node<'_>) -> TextRange {
    TextRange::new(node.start_byte(), node.end_byte())
}

fn is_identifier(node: &Node<'_>) -> bool {
    matches!(node.kind(), "identifier" | "simple_identifier" | "type_identifier")
}

/// Join identifier children of a `qualified_identifier` node with dots.
fn qualified_id(node: &Node<'_>, src: &[u8]) -> String {
    let mut parts = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if is_identifier(&child) {
            parts.push(text(&child, src).to_owned());
        }
    }
    parts.join(".")
}

fn extract_package(node: &Node<'_>, src: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "qualified_identifier" {
            return Some(qualified_id(&child, src));
        }
        if is_identifier(&child) {
            return Some(text(&child, src).to_owned());
        }
    }
    None
}

/// Collects `class_declaration` nodes at any depth, in source order.
fn collect_classes<'src>(node: Node<'_>, source: &'src str, out: &mut Vec<ClassDeclaration<'src>>) {
    if node.kind() == "class_declaration" {
        if let Some(decl) = extract_class(&node, source) {
            out.push(decl);
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_classes(child, source, out);
    }
}

fn extract_class<'src>(node: &Node<'_>, source: &'src str) -> Option<ClassDeclaration<'src>> {
    let src = source.as_bytes();
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();

    let name = children.iter().find(|c| is_identifier(c)).map(|c| text(c, src))?;
    let mut decl = ClassDeclaration::new(source, name, range(node));

    for annotation in annotations_of(node, src) {
        decl = decl.with_annotation(annotation);
    }

    if let Some(ctor) = children.iter().find(|c| c.kind() == "primary_constructor") {
        for param in constructor_parameters(ctor) {
            decl = decl.with_parameter(extract_parameter(&param, src));
        }
    }

    Some(decl)
}

/// `class_parameter` nodes of a primary constructor, with or without the
/// `class_parameters` wrapper.
fn constructor_parameters<'tree>(ctor: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut params = Vec::new();
    let mut cursor = ctor.walk();
    for child in ctor.children(&mut cursor) {
        match child.kind() {
            "class_parameter" => params.push(child),
            "class_parameters" => {
                let mut inner = child.walk();
                params.extend(child.children(&mut inner).filter(|c| c.kind() == "class_parameter"));
            }
            _ => {}
        }
    }
    params
}

fn extract_parameter(node: &Node<'_>, src: &[u8]) -> Parameter {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();

    let name = children
        .iter()
        .find(|c| is_identifier(c))
        .map_or("", |c| text(c, src));

    let type_text = children
        .iter()
        .position(|c| c.kind() == ":")
        .and_then(|colon| children[colon + 1..].iter().find(|c| c.is_named()))
        .map(|t| text(t, src));

    let has_default = children.iter().any(|c| c.kind() == "=");

    let mut param = Parameter::new(name, type_text, range(node));
    if has_default {
        param = param.with_default();
    }
    for annotation in annotations_of(node, src) {
        param = param.with_annotation(annotation);
    }
    param
}

/// Annotations written directly on `node` or inside its `modifiers`.
fn annotations_of(node: &Node<'_>, src: &[u8]) -> Vec<Annotation> {
    let mut found = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "annotation" => found.push(lower_annotation(&child, src)),
            "modifiers" => {
                let mut inner = child.walk();
                found.extend(
                    child
                        .children(&mut inner)
                        .filter(|c| c.kind() == "annotation")
                        .map(|c| lower_annotation(&c, src)),
                );
            }
            _ => {}
        }
    }
    found
}

/// `@field:SerialName("id")` → name `SerialName`, arguments `["id"]`.
fn lower_annotation(node: &Node<'_>, src: &[u8]) -> Annotation {
    let raw = text(node, src).trim_start_matches('@');
    let (head, args) = match raw.split_once('(') {
        Some((head, rest)) => (head, Some(rest.trim_end().trim_end_matches(')'))),
        None => (raw, None),
    };
    let head = head.trim();
    let name = match head.split_once(':') {
        Some((target, name)) if target.chars().all(char::is_alphabetic) => name.trim(),
        _ => head,
    };

    let mut annotation = Annotation::new(name, range(node));
    for arg in args.into_iter().flat_map(|a| a.split(',')) {
        let arg = arg.trim();
        if let Some(unquoted) = arg.strip_prefix('"').and_then(|a| a.strip_suffix('"')) {
            annotation = annotation.with_argument(unquoted);
        }
    }
    annotation
}

fn is_kotlin_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "kt" || ext == "kts")
}

impl Extractor for KotlinExtractor {
    fn language_id(&self) -> &'static str {
        LANGUAGE_ID
    }

    fn accepts(&self, path: &Path) -> bool {
        is_kotlin_file(path)
    }

    fn extract<'src>(&self, source: &'src str) -> Result<ParsedDocument<'src>, ExtractError> {
        self.parse(source).map(ParsedDocument::Source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use superinit_lint_core::Declaration;

    fn parse(src: &str) -> SourceFile<'_> {
        KotlinExtractor::new().parse(src).unwrap()
    }

    #[test]
    fn extracts_package() {
        let file = parse("package com.example.dto\n\nclass A\n");
        assert_eq!(file.package.as_deref(), Some("com.example.dto"));
    }

    #[test]
    fn extracts_class_annotations_and_parameters() {
        let src = r#"package com.example.dto

import kotlinx.serialization.Serializable

@Serializable
data class TestDto(
    val result: Int,
    val message: String = "",
    val items: List<String>,
)
"#;
        let file = parse(src);
        assert_eq!(file.declarations.len(), 1);

        let decl = &file.declarations[0];
        assert_eq!(decl.name(), "TestDto");
        assert!(decl.has_annotation("Serializable"));

        let params = decl.parameters();
        assert_eq!(params.len(), 3);
        assert_eq!(params[0].name, "result");
        assert_eq!(params[0].type_text.as_deref(), Some("Int"));
        assert!(!params[0].has_default_value);
        assert_eq!(decl.source_text(params[0].range), Some("val result: Int"));
        assert!(params[1].has_default_value);
        assert_eq!(params[2].type_text.as_deref(), Some("List<String>"));
    }

    #[test]
    fn qualified_annotation_keeps_full_name() {
        let file = parse("@kotlinx.serialization.Serializable\nclass A(val a: Int)\n");
        assert!(file.declarations[0].has_annotation("kotlinx.serialization.Serializable"));
        assert!(!file.declarations[0].has_annotation("Serializable"));
    }

    #[test]
    fn parameter_annotations_and_leading_length() {
        let src = "class A(\n    @SerialName(\"x_id\") val id: Long,\n)\n";
        let file = parse(src);
        let param = &file.declarations[0].parameters[0];

        assert_eq!(param.annotations.len(), 1);
        assert_eq!(param.annotations[0].name, "SerialName");
        assert_eq!(param.annotations[0].arguments, vec!["x_id".to_string()]);
        assert_eq!(param.leading_annotation_len, "@SerialName(\"x_id\")".len());
    }

    #[test]
    fn suppress_arguments_are_unquoted() {
        let file = parse("@Suppress(\"DtoDefaultValueDetector\", \"unused\")\nclass A(val a: Int)\n");
        let annotation = &file.declarations[0].annotations[0];
        assert_eq!(annotation.name, "Suppress");
        assert_eq!(annotation.arguments, vec!["DtoDefaultValueDetector", "unused"]);
    }

    #[test]
    fn nested_classes_are_collected() {
        let src = "class Outer(val a: Int) {\n    @Serializable\n    data class Inner(val b: Int)\n}\n";
        let file = parse(src);
        let names: Vec<&str> = file.declarations.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Outer", "Inner"]);
        assert!(file.declarations[1].has_annotation("Serializable"));
    }

    #[test]
    fn class_without_constructor_has_no_parameters() {
        let file = parse("@Serializable\nclass Empty\n");
        assert!(file.declarations[0].parameters.is_empty());
    }

    #[test]
    fn empty_source() {
        let file = parse("");
        assert!(file.package.is_none());
        assert!(file.declarations.is_empty());
    }

    #[test]
    fn accepts_kotlin_files() {
        let extractor = KotlinExtractor::new();
        assert!(extractor.accepts(Path::new("src/main/kotlin/Dto.kt")));
        assert!(extractor.accepts(Path::new("build.gradle.kts")));
        assert!(!extractor.accepts(Path::new("Dto.java")));
    }
}
