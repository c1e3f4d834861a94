//! Syntax kinds for the standard rule set
//!
//! Token kinds come first (EOF must stay at 0), node kinds used by the
//! reference statement parser follow.

use crate::text::TokenKind;

/// All token and node kinds of the standard rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    EOF = 0,

    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42
    STRING,  // "hello"

    // =========================================================================
    // DIRECTIVES
    // =========================================================================
    DIRECTIVE,      // #define
    DIRECTIVE_TEXT, // rest-of-line chunk after a directive

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,    // {
    R_BRACE,    // }
    L_PAREN,    // (
    R_PAREN,    // )
    L_BRACKET,  // [
    R_BRACKET,  // ]
    SEMICOLON,  // ;
    COMMA,      // ,
    COLON,      // :
    DOT,        // .
    EQ,         // =
    EQ_EQ,      // ==
    BANG,       // !
    BANG_EQ,    // !=
    LT,         // <
    LT_EQ,      // <=
    GT,         // >
    GT_EQ,      // >=
    PLUS,       // +
    MINUS,      // -
    STAR,       // *
    SLASH,      // /
    PERCENT,    // %
    AMP_AMP,    // &&
    PIPE_PIPE,  // ||

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    LET_KW,
    TRUE_KW,
    FALSE_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    LET_STMT,
    EXPR_STMT,
    DIRECTIVE_STMT,
    BINARY_EXPR,
    CALL_EXPR,
    ARG_LIST,
    PAREN_EXPR,
    LITERAL,
    NAME_REF,

    // Lexical error token, and node wrapping tokens skipped during recovery
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Binary operators accepted between expression atoms
    pub fn is_binary_op(self) -> bool {
        matches!(
            self,
            Self::EQ_EQ
                | Self::BANG_EQ
                | Self::LT
                | Self::LT_EQ
                | Self::GT
                | Self::GT_EQ
                | Self::PLUS
                | Self::MINUS
                | Self::STAR
                | Self::SLASH
                | Self::PERCENT
                | Self::AMP_AMP
                | Self::PIPE_PIPE
        )
    }

    /// Map a raw kind back, if it belongs to this rule set.
    pub fn from_raw(raw: u16) -> Option<Self> {
        if raw < SyntaxKind::__LAST as u16 {
            // Safety: SyntaxKind is repr(u16) with contiguous discriminants
            // starting at 0, and raw is below __LAST
            Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
        } else {
            None
        }
    }
}

impl From<SyntaxKind> for TokenKind {
    fn from(kind: SyntaxKind) -> Self {
        TokenKind(kind as u16)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl TryFrom<TokenKind> for SyntaxKind {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        SyntaxKind::from_raw(kind.0).ok_or(kind)
    }
}

impl PartialEq<SyntaxKind> for TokenKind {
    fn eq(&self, other: &SyntaxKind) -> bool {
        self.0 == *other as u16
    }
}
