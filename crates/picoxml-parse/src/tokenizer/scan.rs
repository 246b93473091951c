//! Per-class token automata.
//!
//! Each machine advances one character at a time from the shared
//! [`InputBuffer`] and reports [`Scan::Finished`] when it reaches its
//! accepting state or [`Scan::NeedMoreInput`] when the buffer runs dry
//! mid-token. Accumulated state survives suspension, so a machine resumed on
//! the next chunk continues exactly where it stopped.
//!
//! Machines are workers owned by the lexer for its whole life: after a
//! successful read the lexer snapshots the result with `finish`, which also
//! resets the machine for its next token of the same class.

use strum_macros::Display;

use super::chars;
use super::token::{PiToken, TagToken};
use crate::error::ParseError;
use crate::input::InputBuffer;

/// Outcome of feeding an automaton from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The automaton reached its accepting state; the token is complete.
    Finished,
    /// Input ran out mid-token. Feed again once more input arrives.
    NeedMoreInput,
}

/// States of the tag automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagState {
    /// Before the leading `<`.
    Start,
    /// After `<`: the next character decides open versus close.
    Open,
    /// Reading an opening tag's name.
    Name,
    /// After `</`: expecting the first character of the closing name.
    CloseSlash,
    /// Reading a closing tag's name.
    CloseName,
    /// Whitespace inside a closing tag, before `>`.
    CloseSpace,
    /// Whitespace inside an opening tag, between name/attributes.
    AttrSpace,
    /// Reading an attribute key.
    AttrKey,
    /// After `=`: expecting the opening `"`.
    AttrQuote,
    /// Reading a quoted attribute value.
    AttrValue,
    /// After a trailing `/`: expecting the final `>` of a self-closing tag.
    Empty,
    /// Accepting state: the closing `>` has been consumed.
    End,
}

/// The tag automaton: `<name k="v" ...>`, `</name>`, `<name/>`.
#[derive(Debug)]
pub struct TagMachine {
    state: TagState,
    token: TagToken,
    key: String,
    value: String,
}

impl Default for TagMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl TagMachine {
    /// Creates a machine in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TagState::Start,
            token: TagToken::new(),
            key: String::new(),
            value: String::new(),
        }
    }

    /// Consumes characters until the tag completes or input runs out.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TagSyntax`] when a character is rejected by the
    /// current state's transition set.
    pub fn feed(&mut self, input: &mut InputBuffer) -> Result<Scan, ParseError> {
        while self.state != TagState::End {
            let Some(c) = input.bump() else {
                return Ok(Scan::NeedMoreInput);
            };
            self.step(c)?;
        }
        Ok(Scan::Finished)
    }

    /// Takes the completed token and resets the machine for reuse.
    pub fn finish(&mut self) -> TagToken {
        self.state = TagState::Start;
        self.key.clear();
        self.value.clear();
        std::mem::take(&mut self.token)
    }

    fn step(&mut self, c: char) -> Result<(), ParseError> {
        match self.state {
            TagState::Start => match c {
                '<' => self.state = TagState::Open,
                _ => return Err(self.reject(c)),
            },
            TagState::Open => match c {
                '/' => {
                    self.token.set_closing();
                    self.state = TagState::CloseSlash;
                }
                _ if chars::is_name_start_char(c) => {
                    self.token.append_to_name(c);
                    self.state = TagState::Name;
                }
                _ => return Err(self.reject(c)),
            },
            TagState::Name => match c {
                '>' => self.state = TagState::End,
                '/' => {
                    self.token.set_empty();
                    self.state = TagState::Empty;
                }
                _ if chars::is_tag_name_char(c) => self.token.append_to_name(c),
                _ if chars::is_space_char(c) => self.state = TagState::AttrSpace,
                _ => return Err(self.reject(c)),
            },
            TagState::CloseSlash => match c {
                _ if chars::is_name_start_char(c) => {
                    self.token.append_to_name(c);
                    self.state = TagState::CloseName;
                }
                _ => return Err(self.reject(c)),
            },
            TagState::CloseName => match c {
                '>' => self.state = TagState::End,
                _ if chars::is_tag_name_char(c) => self.token.append_to_name(c),
                _ if chars::is_space_char(c) => self.state = TagState::CloseSpace,
                _ => return Err(self.reject(c)),
            },
            TagState::CloseSpace => match c {
                '>' => self.state = TagState::End,
                _ if chars::is_space_char(c) => {}
                _ => return Err(self.reject(c)),
            },
            TagState::AttrSpace => match c {
                '>' => self.state = TagState::End,
                '/' => {
                    self.token.set_empty();
                    self.state = TagState::Empty;
                }
                _ if chars::is_name_start_char(c) => {
                    self.key.push(c);
                    self.state = TagState::AttrKey;
                }
                _ if chars::is_space_char(c) => {}
                _ => return Err(self.reject(c)),
            },
            TagState::AttrKey => match c {
                '=' => self.state = TagState::AttrQuote,
                _ if chars::is_attr_key_char(c) => self.key.push(c),
                _ => return Err(self.reject(c)),
            },
            TagState::AttrQuote => match c {
                '"' => self.state = TagState::AttrValue,
                _ => return Err(self.reject(c)),
            },
            TagState::AttrValue => match c {
                '"' => {
                    self.token
                        .append_attribute(std::mem::take(&mut self.key), std::mem::take(&mut self.value));
                    self.state = TagState::AttrSpace;
                }
                _ if chars::is_attr_value_char(c) => self.value.push(c),
                _ => return Err(self.reject(c)),
            },
            TagState::Empty => match c {
                '>' => self.state = TagState::End,
                _ => return Err(self.reject(c)),
            },
            // The feed loop stops before stepping from the accepting state.
            TagState::End => {}
        }
        Ok(())
    }

    fn reject(&self, c: char) -> ParseError {
        ParseError::TagSyntax {
            found: c,
            state: self.state.to_string(),
        }
    }
}

/// States of the processing-instruction automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PiState {
    /// Before the leading `<`.
    Start,
    /// After `<`: expecting `?`.
    Open,
    /// Reading the instruction contents.
    Contents,
    /// After the closing `?`: expecting `>`.
    Close,
    /// Accepting state.
    End,
}

/// The processing-instruction automaton: `<?contents?>`.
#[derive(Debug)]
pub struct PiMachine {
    state: PiState,
    token: PiToken,
}

impl Default for PiMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PiMachine {
    /// Creates a machine in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PiState::Start,
            token: PiToken::default(),
        }
    }

    /// Consumes characters until the instruction completes or input runs
    /// out.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::PiSyntax`] when a character is rejected by the
    /// current state's transition set.
    pub fn feed(&mut self, input: &mut InputBuffer) -> Result<Scan, ParseError> {
        while self.state != PiState::End {
            let Some(c) = input.bump() else {
                return Ok(Scan::NeedMoreInput);
            };
            self.step(c)?;
        }
        Ok(Scan::Finished)
    }

    /// Takes the completed token and resets the machine for reuse.
    pub fn finish(&mut self) -> PiToken {
        self.state = PiState::Start;
        std::mem::take(&mut self.token)
    }

    fn step(&mut self, c: char) -> Result<(), ParseError> {
        match self.state {
            PiState::Start => match c {
                '<' => self.state = PiState::Open,
                _ => return Err(self.reject(c)),
            },
            PiState::Open => match c {
                '?' => self.state = PiState::Contents,
                _ => return Err(self.reject(c)),
            },
            PiState::Contents => match c {
                '?' => self.state = PiState::Close,
                _ if chars::is_pi_content_char(c) => self.token.contents.push(c),
                _ => return Err(self.reject(c)),
            },
            PiState::Close => match c {
                '>' => self.state = PiState::End,
                _ => return Err(self.reject(c)),
            },
            PiState::End => {}
        }
        Ok(())
    }

    fn reject(&self, c: char) -> ParseError {
        ParseError::PiSyntax {
            found: c,
            state: self.state.to_string(),
        }
    }
}

/// The "run of characters" automaton shared by text and whitespace.
///
/// Accumulates while the class predicate accepts; the first rejected
/// character is pushed back for the next token and the run is complete. End
/// of input suspends the run instead of finishing it, so a run split across
/// chunks still lexes as one token.
#[derive(Debug)]
pub struct RunMachine {
    accepts: fn(char) -> bool,
    buffer: String,
}

impl RunMachine {
    /// Creates a run machine for the given character class.
    #[must_use]
    pub fn new(accepts: fn(char) -> bool) -> Self {
        Self {
            accepts,
            buffer: String::new(),
        }
    }

    /// Consumes characters while the predicate accepts them.
    pub fn feed(&mut self, input: &mut InputBuffer) -> Scan {
        while let Some(c) = input.bump() {
            if (self.accepts)(c) {
                self.buffer.push(c);
            } else {
                input.put_back(c);
                return Scan::Finished;
            }
        }
        Scan::NeedMoreInput
    }

    /// The run accumulated so far, complete or not.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Takes the completed run and resets the machine for reuse.
    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}
