// Word: one casing-delimited piece of a compound identifier

/// A word produced by splitting an identifier at casing boundaries.
///
/// Borrows from the identifier it was split from. The text is never empty
/// and keeps the original character case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    /// The text content of this word.
    pub text: &'a str,

    /// Position of this word within the identifier (character offset).
    pub pos: usize,

    /// Length of the word in characters.
    pub len: usize,
}

impl<'a> Word<'a> {
    /// Create a new word, counting its characters.
    pub fn new(text: &'a str, pos: usize) -> Self {
        Self {
            text,
            pos,
            len: text.chars().count(),
        }
    }

    /// Character offset one past the end of this word.
    pub fn end(&self) -> usize {
        self.pos + self.len
    }
}

impl AsRef<str> for Word<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}
