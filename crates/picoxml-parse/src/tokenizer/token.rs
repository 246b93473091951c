//! Finished token values handed from the lexer to the parser.

use picoxml_dom::AttrNode;
use picoxml_list::NodeList;

/// A fully read tag: name, direction flags, and (for opening tags) the
/// complete attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagToken {
    /// The tag name, accumulated character by character.
    pub name: String,
    /// Set for `</name>` closing tags.
    pub closing: bool,
    /// Set for `<name/>` self-closing tags.
    pub empty: bool,
    /// Attributes in source order; duplicate names are kept.
    pub attributes: NodeList<AttrNode>,
}

impl TagToken {
    /// Creates a blank tag token: empty name, both flags unset, no
    /// attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one character to the tag name.
    pub fn append_to_name(&mut self, c: char) {
        self.name.push(c);
    }

    /// Marks this tag as a closing tag.
    pub fn set_closing(&mut self) {
        self.closing = true;
    }

    /// Marks this tag as self-closing.
    pub fn set_empty(&mut self) {
        self.empty = true;
    }

    /// Appends a completed key/value pair, preserving insertion order.
    pub fn append_attribute(&mut self, name: String, value: String) {
        self.attributes.push_back(AttrNode::new(name, value));
    }
}

/// A processing instruction's raw contents, without the `<?` / `?>`
/// delimiters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PiToken {
    /// Everything between `<?` and `?>`.
    pub contents: String,
}

/// One completed token.
///
/// Tokens are ephemeral: the lexer appends them to its output list as soon
/// as the owning automaton reaches its accepting state, and the parser
/// consumes them in order. No partially read token is ever visible here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening, closing, or self-closing tag.
    Tag(TagToken),
    /// A processing instruction.
    Pi(PiToken),
    /// A run of whitespace between tags.
    Space(String),
    /// A run of bare text, whitespace included.
    Text(String),
}
