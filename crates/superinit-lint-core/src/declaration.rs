//! Structured-data declarations consumed by source rules.
//!
//! The Kotlin front end lowers class declarations into [`ClassDeclaration`]s.
//! Rules query them through the [`Declaration`] capability and never look at
//! raw syntax.

use crate::tree::TextRange;

/// An annotation attached to a declaration or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Referenced type name as written, without `@`, use-site target or
    /// arguments (e.g. `Serializable`, `kotlinx.serialization.Serializable`).
    pub name: String,
    /// String literal arguments with their quotes removed.
    pub arguments: Vec<String>,
    /// Range of the whole annotation, `@` included.
    pub range: TextRange,
}

impl Annotation {
    /// Creates an annotation without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, range: TextRange) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            range,
        }
    }

    /// Adds a string argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Name after the last `.`.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// A primary-constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type as written (`List<String>`), if any.
    pub type_text: Option<String>,
    /// Whether `= <expr>` follows the type.
    pub has_default_value: bool,
    /// Range of the whole parameter, modifiers and annotations included.
    pub range: TextRange,
    /// Byte length of the leading annotation block, measured from
    /// `range.start` to the end of the last leading annotation.
    pub leading_annotation_len: usize,
    /// Annotations on the parameter.
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    /// Creates a parameter without annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, type_text: Option<&str>, range: TextRange) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.map(String::from),
            has_default_value: false,
            range,
            leading_annotation_len: 0,
            annotations: Vec::new(),
        }
    }

    /// Marks the parameter as having a default value.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default_value = true;
        self
    }

    /// Adds a leading annotation and extends the annotation block to cover it.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        let end = annotation.range.end.saturating_sub(self.range.start);
        self.leading_annotation_len = self.leading_annotation_len.max(end);
        self.annotations.push(annotation);
        self
    }
}

/// Capability exposed by a parsed class declaration.
pub trait Declaration {
    /// Declared class name.
    fn name(&self) -> &str;

    /// Range of the whole declaration.
    fn range(&self) -> TextRange;

    /// Annotations on the declaration itself.
    fn annotations(&self) -> &[Annotation];

    /// Primary-constructor parameters in declaration order.
    fn parameters(&self) -> &[Parameter];

    /// Literal source text of `range`.
    fn source_text(&self, range: TextRange) -> Option<&str>;

    /// Returns true if an annotation's referenced type name equals `name`.
    fn has_annotation(&self, name: &str) -> bool {
        self.annotations().iter().any(|a| a.name == name)
    }
}

/// Class declaration borrowed from its source file.
#[derive(Debug, Clone)]
pub struct ClassDeclaration<'src> {
    source: &'src str,
    /// Class name.
    pub name: String,
    /// Range of the declaration.
    pub range: TextRange,
    /// Class-level annotations.
    pub annotations: Vec<Annotation>,
    /// Primary-constructor parameters.
    pub parameters: Vec<Parameter>,
}

impl<'src> ClassDeclaration<'src> {
    /// Creates an empty declaration over `source`.
    #[must_use]
    pub fn new(source: &'src str, name: impl Into<String>, range: TextRange) -> Self {
        Self {
            source,
            name: name.into(),
            range,
            annotations: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Adds a class-level annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Adds a primary-constructor parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// The full source this declaration was parsed from.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }
}

impl Declaration for ClassDeclaration<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn range(&self) -> TextRange {
        self.range
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn source_text(&self, range: TextRange) -> Option<&str> {
        range.slice(self.source)
    }
}

/// All declarations found in one source file.
#[derive(Debug, Clone, Default)]
pub struct SourceFile<'src> {
    /// Package header, if present.
    pub package: Option<String>,
    /// Class declarations at any nesting depth, in source order.
    pub declarations: Vec<ClassDeclaration<'src>>,
}
