//! Streaming lexer and tree-building parser for picoxml markup.
//!
//! The pipeline is strictly one-directional: characters flow into the
//! [`tokenizer`], which classifies them into tags, processing instructions,
//! whitespace runs, and text runs; completed tokens drive the [`parser`],
//! which grows an element/text tree rooted at a document sentinel.
//!
//! Input may arrive in arbitrary-sized chunks, down to one byte at a time.
//! Every automaton suspends at end-of-chunk and resumes on the next call
//! without losing state, so splitting a document at any byte boundary
//! produces the same tree as feeding it whole.

pub mod error;
pub mod input;
pub mod parser;
pub mod tokenizer;

pub use error::ParseError;
pub use parser::{XmlParser, print_tree};
