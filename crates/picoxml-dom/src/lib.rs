//! Tree model for picoxml documents.
//!
//! A document is a sentinel root owning an ordered list of top-level nodes;
//! each node is either a text run or an element, and an element owns its
//! attribute list and its children outright. Ownership points strictly
//! downward, so dropping a node drops its whole subtree.
//!
//! Every node knows how to serialize itself back to markup via
//! `render_into`; the output uses explicit open/close tags throughout, so a
//! self-closing tag in the input comes back out as `<name></name>`.

use picoxml_list::NodeList;

/// A single `name="value"` attribute.
///
/// Attribute lists keep insertion order and permit duplicate names; lookup
/// helpers return the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrNode {
    name: String,
    value: String,
}

impl AttrNode {
    /// Creates an attribute from a name/value pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value, without its surrounding quotes.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    /// Creates a text node holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The text content, exactly as it will be rendered.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A named element with ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    name: String,
    attributes: NodeList<AttrNode>,
    children: NodeList<XmlNode>,
}

impl ElementNode {
    /// Creates an element with no attributes and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: NodeList::new(),
            children: NodeList::new(),
        }
    }

    /// The tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an attribute, keeping insertion order even for duplicates.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push_back(AttrNode::new(name, value));
    }

    /// Value of the first attribute named `name`, if any.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == name)
            .map(AttrNode::value)
    }

    /// The ordered attribute list.
    #[must_use]
    pub fn attributes(&self) -> &NodeList<AttrNode> {
        &self.attributes
    }

    /// Appends `child` as the new last child.
    pub fn append_child(&mut self, child: XmlNode) {
        self.children.push_back(child);
    }

    /// The ordered child list.
    #[must_use]
    pub fn children(&self) -> &NodeList<XmlNode> {
        &self.children
    }

    /// Writes the open tag (`<name k="v" ...>`) to `out`.
    pub fn render_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for attr in &self.attributes {
            out.push(' ');
            out.push_str(attr.name());
            out.push_str("=\"");
            out.push_str(attr.value());
            out.push('"');
        }
        out.push('>');
    }

    /// Writes the close tag (`</name>`) to `out`.
    pub fn render_close_tag(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    /// Serializes the element and its whole subtree to `out`.
    ///
    /// An element with no children renders as `<name></name>`: the open/close
    /// pair is always explicit.
    pub fn render_into(&self, out: &mut String) {
        self.render_open_tag(out);
        for child in &self.children {
            child.render_into(out);
        }
        self.render_close_tag(out);
    }

    /// Serializes the element and its subtree to a fresh string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// A tree node: either character data or an element subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A run of character data, rendered verbatim.
    Text(TextNode),
    /// An element with attributes and children.
    Element(ElementNode),
}

impl XmlNode {
    /// Borrows the element inside, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Borrows the text node inside, if this node is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Serializes this node (and, for elements, its subtree) to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text.text()),
            Self::Element(element) => element.render_into(out),
        }
    }
}

/// The sentinel root of a parsed document.
///
/// The document is not itself a tree node; it only owns the ordered list of
/// top-level nodes. A well-formed document has at most one top-level element,
/// but text runs beside it are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    children: NodeList<XmlNode>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level node.
    pub fn append_child(&mut self, child: XmlNode) {
        self.children.push_back(child);
    }

    /// The ordered top-level node list.
    #[must_use]
    pub fn children(&self) -> &NodeList<XmlNode> {
        &self.children
    }

    /// The first top-level element, if the document has one.
    #[must_use]
    pub fn root_element(&self) -> Option<&ElementNode> {
        self.children.iter().find_map(XmlNode::as_element)
    }

    /// Serializes every top-level node, in order, to `out`.
    pub fn render_into(&self, out: &mut String) {
        for child in &self.children {
            child.render_into(out);
        }
    }

    /// Serializes the whole document to a fresh string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}
