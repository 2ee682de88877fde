//! Generic markup tree consumed by layout rules.
//!
//! Front ends build [`Element`] trees from parsed markup; rules only see the
//! [`Node`] capability and dispatch on [`Node::kind`].

use serde::{Deserialize, Serialize};

/// Namespace URI of the Android framework attributes (`android:`).
pub const ANDROID_URI: &str = "http://schemas.android.com/apk/res/android";

/// Namespace URI of application attributes (`app:`).
pub const AUTO_URI: &str = "http://schemas.android.com/apk/res-auto";

/// Namespace URI of design-time tool attributes (`tools:`).
pub const TOOLS_URI: &str = "http://schemas.android.com/tools";

/// Half-open byte range `[start, end)` into a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl TextRange {
    /// Creates a range, clamping `end` so it never precedes `start`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Length of the range in bytes.
    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-length range.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the substring of `source` covered by this range.
    ///
    /// `None` when the range is out of bounds or splits a character.
    #[must_use]
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}

/// A single attribute as emitted by the markup parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Resolved namespace URI, if the attribute was prefixed.
    pub namespace: Option<String>,
    /// Local name without prefix (e.g. `layout_constraintTop_toTopOf`).
    pub local_name: String,
    /// Raw attribute value.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute without a namespace.
    #[must_use]
    pub fn new(local_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
            value: value.into(),
        }
    }

    /// Creates a namespaced attribute.
    #[must_use]
    pub fn with_namespace(
        namespace: impl Into<String>,
        local_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
            value: value.into(),
        }
    }

    /// Returns true if this attribute lives in `namespace`.
    #[must_use]
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }
}

/// Read-only view of a markup element.
///
/// Implementations must be immutable for the duration of an analysis.
pub trait Node {
    /// Tag name as written (e.g. `androidx.constraintlayout.widget.Flow`).
    fn kind(&self) -> &str;

    /// Attributes in parser order.
    fn attributes(&self) -> &[Attribute];

    /// Element children in document order. Text and comments are not nodes.
    fn children(&self) -> Vec<&dyn Node>;

    /// Range of the whole element.
    fn range(&self) -> TextRange;

    /// Range of the tag name; defaults to the whole element.
    fn name_range(&self) -> TextRange {
        self.range()
    }

    /// First attribute with the given local name, in any namespace.
    fn attribute(&self, local_name: &str) -> Option<&Attribute> {
        self.attributes()
            .iter()
            .find(|a| a.local_name == local_name)
    }

    /// First attribute with the given local name in `namespace`.
    fn attribute_ns(&self, namespace: &str, local_name: &str) -> Option<&Attribute> {
        self.attributes()
            .iter()
            .find(|a| a.local_name == local_name && a.in_namespace(namespace))
    }
}

/// Owned element tree produced by the layout front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    kind: String,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
    range: TextRange,
    name_range: Option<TextRange>,
}

impl Element {
    /// Creates an element with the given tag.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Appends an attribute without a namespace.
    #[must_use]
    pub fn with_attr(mut self, local_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(local_name, value));
        self
    }

    /// Appends a namespaced attribute.
    #[must_use]
    pub fn with_attr_ns(
        mut self,
        namespace: impl Into<String>,
        local_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes
            .push(Attribute::with_namespace(namespace, local_name, value));
        self
    }

    /// Appends an already built attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the element range.
    #[must_use]
    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the tag name range.
    #[must_use]
    pub fn with_name_range(mut self, range: TextRange) -> Self {
        self.name_range = Some(range);
        self
    }
}

impl Node for Element {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.children.iter().map(|c| c as &dyn Node).collect()
    }

    fn range(&self) -> TextRange {
        self.range
    }

    fn name_range(&self) -> TextRange {
        self.name_range.unwrap_or(self.range)
    }
}
