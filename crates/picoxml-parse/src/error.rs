//! Fatal parse errors.
//!
//! Every variant aborts the current parse: the parser stops consuming input
//! and returns the same error from every later `feed`. Running out of input
//! mid-token is deliberately *not* an error; that is the normal
//! need-more-input condition handled inside the tokenizer.

use thiserror::Error;

/// A condition that makes the current parse unrecoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No lexical class accepts the next input character.
    #[error("no token class accepts character {0:?}")]
    UnknownToken(char),

    /// The tag automaton rejected a character outside its accepting state.
    #[error("unexpected character {found:?} while reading a tag ({state} state)")]
    TagSyntax {
        /// The rejected character.
        found: char,
        /// Name of the automaton state that rejected it.
        state: String,
    },

    /// The processing-instruction automaton rejected a character.
    #[error("unexpected character {found:?} while reading a processing instruction ({state} state)")]
    PiSyntax {
        /// The rejected character.
        found: char,
        /// Name of the automaton state that rejected it.
        state: String,
    },

    /// A closing tag did not match the innermost open tag.
    #[error("closing tag </{found}> does not match open tag <{expected}>")]
    UnbalancedTag {
        /// Name of the innermost open tag.
        expected: String,
        /// Name carried by the closing tag.
        found: String,
    },

    /// A closing tag arrived while no tag was open.
    #[error("closing tag </{0}> with no open tag")]
    UnexpectedClose(String),

    /// An element would start a second top-level element after the first
    /// root was already closed.
    #[error("element <{0}> would start a second top-level element")]
    MultipleTopLevelElements(String),
}
