//! Logos token enums for the standard rule set, one per scanning mode.

use logos::Logos;

use super::syntax_kind::SyntaxKind;

/// Tokens of the initial (top-level) mode
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum InitialToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    /// `#name`; the rest of its line is scanned in directive mode
    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_]*")]
    Directive,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("let")]
    LetKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
}

/// Tokens inside the nested buffer following a directive name
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum DirectiveToken {
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"[^ \t\r\n]+")]
    Text,
}

impl From<InitialToken> for SyntaxKind {
    fn from(token: InitialToken) -> Self {
        use InitialToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            String => SyntaxKind::STRING,
            Directive => SyntaxKind::DIRECTIVE,

            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            AmpAmp => SyntaxKind::AMP_AMP,
            PipePipe => SyntaxKind::PIPE_PIPE,

            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Colon => SyntaxKind::COLON,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            Bang => SyntaxKind::BANG,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,

            LetKw => SyntaxKind::LET_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            FalseKw => SyntaxKind::FALSE_KW,
        }
    }
}

impl From<DirectiveToken> for SyntaxKind {
    fn from(token: DirectiveToken) -> Self {
        match token {
            DirectiveToken::Whitespace => SyntaxKind::WHITESPACE,
            DirectiveToken::Text => SyntaxKind::DIRECTIVE_TEXT,
        }
    }
}
