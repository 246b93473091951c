//! Character classification, token automata, and the lexer.
//!
//! One finite automaton exists per lexical class: tags, processing
//! instructions, and a predicate-parametrized "run of characters" machine
//! shared by whitespace and text. The [`lexer::XmlLexer`] selects among them
//! by lookahead and feeds the chosen machine until it finishes or input runs
//! out.

pub mod chars;
pub mod lexer;
pub mod scan;
pub mod token;

pub use lexer::XmlLexer;
pub use token::{PiToken, TagToken, Token};
