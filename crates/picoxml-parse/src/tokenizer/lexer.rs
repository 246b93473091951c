//! Worker selection and the streaming lexer.

use picoxml_list::NodeList;

use super::chars;
use super::scan::{PiMachine, RunMachine, Scan, TagMachine};
use super::token::Token;
use crate::error::ParseError;
use crate::input::InputBuffer;

/// The lexical classes, in trial order.
///
/// Pi and Tag come first because they share the `<` prefix with nothing
/// else and are told apart by the two-character lookahead; Space precedes
/// Text so that a run starting with whitespace is classified as whitespace
/// even though text characters include whitespace too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Pi,
    Tag,
    Space,
    Text,
}

const TRIAL_ORDER: [TokenClass; 4] = [
    TokenClass::Pi,
    TokenClass::Tag,
    TokenClass::Space,
    TokenClass::Text,
];

/// Result of a worker's non-consuming lookahead.
///
/// `NeedMore` covers a bare `<` at the end of a chunk: with the second
/// character missing, Pi and Tag cannot be told apart yet, so selection
/// suspends instead of misclassifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    Yes,
    No,
    NeedMore,
}

/// The streaming lexer.
///
/// Owns one worker machine per lexical class for its whole life; each
/// finished token is snapshotted into the output list and the worker is
/// reset for reuse. At most one worker is ever mid-token, and its state
/// survives across `feed` calls.
#[derive(Debug)]
pub struct XmlLexer {
    input: InputBuffer,
    pi: PiMachine,
    tag: TagMachine,
    space: RunMachine,
    text: RunMachine,
    current: Option<TokenClass>,
    tokens: NodeList<Token>,
}

impl Default for XmlLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlLexer {
    /// Creates a lexer with all workers in their initial states.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: InputBuffer::new(),
            pi: PiMachine::new(),
            tag: TagMachine::new(),
            space: RunMachine::new(chars::is_space_char),
            text: RunMachine::new(chars::is_text_char),
            current: None,
            tokens: NodeList::new(),
        }
    }

    /// Lexes one chunk of input.
    ///
    /// Completed tokens accumulate in the output list (see
    /// [`take_tokens`](Self::take_tokens)); a token cut off by the end of
    /// the chunk stays in its worker and resumes on the next call.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownToken`] when no class accepts the next
    /// character, or the worker's own syntax error when its automaton
    /// rejects one.
    pub fn feed(&mut self, chunk: &str) -> Result<(), ParseError> {
        self.input.push_chunk(chunk);
        loop {
            let class = match self.current {
                Some(class) => class,
                None => match self.select()? {
                    Some(class) => {
                        self.current = Some(class);
                        class
                    }
                    None => return Ok(()),
                },
            };

            let scan = match class {
                TokenClass::Pi => self.pi.feed(&mut self.input)?,
                TokenClass::Tag => self.tag.feed(&mut self.input)?,
                TokenClass::Space => self.space.feed(&mut self.input),
                TokenClass::Text => self.text.feed(&mut self.input),
            };

            match scan {
                Scan::Finished => {
                    let token = match class {
                        TokenClass::Pi => Token::Pi(self.pi.finish()),
                        TokenClass::Tag => Token::Tag(self.tag.finish()),
                        TokenClass::Space => Token::Space(self.space.finish()),
                        TokenClass::Text => Token::Text(self.text.finish()),
                    };
                    self.tokens.push_back(token);
                    self.current = None;
                }
                Scan::NeedMoreInput => return Ok(()),
            }
        }
    }

    /// Takes every token completed so far, leaving the output list empty.
    pub fn take_tokens(&mut self) -> NodeList<Token> {
        std::mem::take(&mut self.tokens)
    }

    /// The text run currently mid-accumulation, if the in-progress worker
    /// is the text machine.
    ///
    /// Used for rendering an in-progress document: a text run that has not
    /// met its terminating character yet is still worth showing.
    #[must_use]
    pub fn pending_text(&self) -> Option<&str> {
        (self.current == Some(TokenClass::Text)).then(|| self.text.buffer())
    }

    /// Picks the first worker whose lookahead accepts the next character.
    ///
    /// `Ok(None)` means selection must wait for more input: either the
    /// buffer is empty or a bare `<` needs its second character.
    fn select(&self) -> Result<Option<TokenClass>, ParseError> {
        let Some(c) = self.input.peek() else {
            return Ok(None);
        };
        for class in TRIAL_ORDER {
            match Self::can_begin(class, &self.input) {
                Lookahead::Yes => return Ok(Some(class)),
                Lookahead::NeedMore => return Ok(None),
                Lookahead::No => {}
            }
        }
        Err(ParseError::UnknownToken(c))
    }

    fn can_begin(class: TokenClass, input: &InputBuffer) -> Lookahead {
        match class {
            TokenClass::Pi => match input.peek() {
                Some('<') => match input.peek_second() {
                    None => Lookahead::NeedMore,
                    Some('?') => Lookahead::Yes,
                    Some(_) => Lookahead::No,
                },
                _ => Lookahead::No,
            },
            TokenClass::Tag => match input.peek() {
                Some('<') => match input.peek_second() {
                    None => Lookahead::NeedMore,
                    Some('?') => Lookahead::No,
                    Some(_) => Lookahead::Yes,
                },
                _ => Lookahead::No,
            },
            TokenClass::Space => {
                if input.peek().is_some_and(chars::is_space_char) {
                    Lookahead::Yes
                } else {
                    Lookahead::No
                }
            }
            TokenClass::Text => {
                if input.peek().is_some_and(chars::is_text_char) {
                    Lookahead::Yes
                } else {
                    Lookahead::No
                }
            }
        }
    }
}
