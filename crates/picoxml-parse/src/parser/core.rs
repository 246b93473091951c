//! Token-driven tree construction.

use std::collections::HashSet;

use picoxml_common::warning::warn_once;
use picoxml_dom::{Document, ElementNode, TextNode, XmlNode};
use picoxml_list::NodeList;

use crate::error::ParseError;
use crate::tokenizer::{TagToken, Token, XmlLexer};

/// The streaming parser.
///
/// Accepts markup in arbitrary chunks and grows an element/text tree rooted
/// at a document sentinel. The stack of open elements owns every element
/// whose closing tag has not arrived yet; closing a tag pops the element and
/// attaches it to the new stack top (or to the document when the stack
/// empties). The stack therefore always mirrors the path from the root to
/// the element currently accepting children.
///
/// The first error poisons the parser: every later `feed` returns the same
/// error without consuming input.
#[derive(Debug)]
pub struct XmlParser {
    lexer: XmlLexer,
    document: Document,
    open: NodeList<ElementNode>,
    opened_root: bool,
    error: Option<ParseError>,
}

impl Default for XmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlParser {
    /// Creates a parser with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexer: XmlLexer::new(),
            document: Document::new(),
            open: NodeList::new(),
            opened_root: false,
            error: None,
        }
    }

    /// Parses one chunk of markup.
    ///
    /// Chunks may split the document anywhere, down to one byte at a time;
    /// a token cut off by the end of a chunk resumes on the next call.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; from then on every
    /// call returns that same error and no further input is consumed.
    pub fn feed(&mut self, chunk: &str) -> Result<(), ParseError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        let result = self.feed_chunk(chunk);
        if let Err(error) = &result {
            self.error = Some(error.clone());
        }
        result
    }

    /// `true` once at least one top-level element has been started and
    /// every open tag has been closed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.error.is_none() && self.opened_root && self.open.is_empty()
    }

    /// The document built so far.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The first top-level element, once its opening tag has been closed.
    #[must_use]
    pub fn root_element(&self) -> Option<&ElementNode> {
        self.document.root_element()
    }

    /// Consumes the parser and hands the document to the caller.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Renders the document as it stands, auto-closing open elements.
    ///
    /// Already-attached nodes render normally; then each open element
    /// contributes its open tag and closed children, outermost first; a
    /// text run still mid-accumulation in the lexer is included; finally
    /// every open tag is closed in innermost-first order. On a finished
    /// document this is identical to rendering the document itself.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.document.render_into(&mut out);
        for element in &self.open {
            element.render_open_tag(&mut out);
            for child in element.children() {
                child.render_into(&mut out);
            }
        }
        if let Some(text) = self.lexer.pending_text() {
            out.push_str(text);
        }
        let mut cursor = self.open.rbegin();
        while cursor != self.open.rend() {
            if let Some(element) = self.open.get(cursor) {
                element.render_close_tag(&mut out);
            }
            cursor = self.open.prev(cursor);
        }
        out
    }

    fn feed_chunk(&mut self, chunk: &str) -> Result<(), ParseError> {
        self.lexer.feed(chunk)?;
        let mut tokens = self.lexer.take_tokens();
        while let Some(token) = tokens.pop_front() {
            self.process_token(token)?;
        }
        Ok(())
    }

    fn process_token(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            // Whitespace between tags never becomes tree content.
            Token::Space(_) => {}
            Token::Pi(pi) => {
                warn_once(
                    "Parser",
                    &format!("ignoring processing instruction <?{}?>", pi.contents),
                );
            }
            Token::Text(text) => self.append_node(XmlNode::Text(TextNode::new(text))),
            Token::Tag(tag) if tag.closing => self.close_element(&tag)?,
            Token::Tag(tag) => self.open_element(tag)?,
        }
        Ok(())
    }

    fn open_element(&mut self, tag: TagToken) -> Result<(), ParseError> {
        if self.open.is_empty() {
            if self.opened_root {
                return Err(ParseError::MultipleTopLevelElements(tag.name));
            }
            self.opened_root = true;
        }
        let empty = tag.empty;
        let element = Self::element_from(tag);
        if empty {
            // Self-closing tags never reach the open stack.
            self.append_node(XmlNode::Element(element));
        } else {
            self.open.push_back(element);
        }
        Ok(())
    }

    fn close_element(&mut self, tag: &TagToken) -> Result<(), ParseError> {
        match self.open.back() {
            None => return Err(ParseError::UnexpectedClose(tag.name.clone())),
            Some(top) if top.name() != tag.name => {
                return Err(ParseError::UnbalancedTag {
                    expected: top.name().to_string(),
                    found: tag.name.clone(),
                });
            }
            Some(_) => {}
        }
        if let Some(element) = self.open.pop_back() {
            self.append_node(XmlNode::Element(element));
        }
        Ok(())
    }

    /// Attaches a node to the innermost open element, or to the document
    /// when no tag is open.
    fn append_node(&mut self, node: XmlNode) {
        if let Some(parent) = self.open.back_mut() {
            parent.append_child(node);
        } else {
            self.document.append_child(node);
        }
    }

    fn element_from(tag: TagToken) -> ElementNode {
        let mut element = ElementNode::new(tag.name);
        let mut seen: HashSet<String> = HashSet::new();
        for attr in &tag.attributes {
            if !seen.insert(attr.name().to_string()) {
                let name = attr.name();
                let owner = element.name().to_string();
                warn_once(
                    "Parser",
                    &format!("duplicate attribute name {name:?} on <{owner}> kept in source order"),
                );
            }
            element.add_attribute(attr.name(), attr.value());
        }
        element
    }
}
