//! Chunked character input shared by every token automaton.

use std::collections::VecDeque;

/// An ordered character source that accepts input in arbitrary chunks.
///
/// The automata consume one character at a time and may push exactly one
/// just-consumed character back (a token "returns" the delimiter that ended
/// it so the next token can start on it). Peeking never consumes.
#[derive(Debug, Default)]
pub struct InputBuffer {
    chars: VecDeque<char>,
}

impl InputBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk of input after any characters still buffered.
    pub fn push_chunk(&mut self, chunk: &str) {
        self.chars.extend(chunk.chars());
    }

    /// The next character, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.front().copied()
    }

    /// The character after the next one, without consuming anything.
    ///
    /// Used to tell `<?` (processing instruction) apart from `<` (tag).
    #[must_use]
    pub fn peek_second(&self) -> Option<char> {
        self.chars.get(1).copied()
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        self.chars.pop_front()
    }

    /// Pushes a just-consumed character back to the front of the buffer.
    pub fn put_back(&mut self, c: char) {
        self.chars.push_front(c);
    }

    /// Returns `true` if no characters are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_concatenate_in_order() {
        let mut input = InputBuffer::new();
        input.push_chunk("ab");
        input.push_chunk("c");
        assert_eq!(input.bump(), Some('a'));
        assert_eq!(input.bump(), Some('b'));
        assert_eq!(input.bump(), Some('c'));
        assert_eq!(input.bump(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut input = InputBuffer::new();
        input.push_chunk("xy");
        assert_eq!(input.peek(), Some('x'));
        assert_eq!(input.peek_second(), Some('y'));
        assert_eq!(input.bump(), Some('x'));
        assert_eq!(input.peek_second(), None);
    }

    #[test]
    fn put_back_restores_the_character() {
        let mut input = InputBuffer::new();
        input.push_chunk("<a");
        let c = input.bump().unwrap();
        input.put_back(c);
        assert_eq!(input.peek(), Some('<'));
        assert!(!input.is_empty());
    }
}
