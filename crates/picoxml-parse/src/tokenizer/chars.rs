//! Character predicates used as automaton guards and lexer lookahead.
//!
//! All pure and stateless. The grammar is deliberately narrow: names are
//! ASCII alphabetic with alphanumeric-or-hyphen continuations, attribute
//! values are double-quoted, and text is anything printable-or-whitespace
//! that cannot open markup.

/// First character of an element or attribute name.
#[must_use]
pub fn is_name_start_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Continuation character of an element name.
#[must_use]
pub fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Continuation character of an attribute key.
#[must_use]
pub fn is_attr_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// A character allowed inside bare text: printable or whitespace, but never
/// `<` (opens markup) or `&` (reserved, entities are unsupported).
#[must_use]
pub fn is_text_char(c: char) -> bool {
    (c.is_whitespace() || !c.is_control()) && c != '<' && c != '&'
}

/// A character allowed inside a quoted attribute value: any text character
/// except the terminating quote.
#[must_use]
pub fn is_attr_value_char(c: char) -> bool {
    is_text_char(c) && c != '"'
}

/// A whitespace character.
#[must_use]
pub fn is_space_char(c: char) -> bool {
    c.is_whitespace()
}

/// A character allowed inside `<?`...`?>` contents.
#[must_use]
pub fn is_pi_content_char(c: char) -> bool {
    is_text_char(c) && c != '?' && c != '>'
}
