//! Tokens as produced by a [`Lexer`](crate::lexer::Lexer).

use std::fmt;
use std::ops::Range;

use text_size::{TextRange, TextSize};

/// Kind tag of a token.
///
/// Rule sets pick their own numbering; raw value 0 is reserved for
/// [`TokenKind::EOF`] everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenKind(pub u16);

impl TokenKind {
    pub const EOF: TokenKind = TokenKind(0);
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind.0)
    }
}

/// A kind tag plus a byte range into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
}

/// Ordered tokens of one unit, ending with exactly one EOF token.
pub type TokenSequence = Vec<Token>;

impl Token {
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// The canonical end-of-file token: empty range at the end of the buffer.
    pub fn eof(len: TextSize) -> Self {
        Self::new(TokenKind::EOF, TextRange::empty(len))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// Start offset
    pub fn left(&self) -> TextSize {
        self.range.start()
    }

    /// One-past-the-end offset
    pub fn right(&self) -> TextSize {
        self.range.end()
    }

    /// The slice of `base` this token covers.
    ///
    /// Returns an empty string if the range does not fit `base`.
    pub fn text<'a>(&self, base: &'a str) -> &'a str {
        base.get(Range::<usize>::from(self.range)).unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} @{:?})", self.kind.0, self.range)
    }
}
