//! Lexing layer
//!
//! The analysis core only ever talks to the [`Lexer`] trait. Concrete
//! scanning technology sits behind [`ScanRules`] and is driven by
//! [`ScanAdapter`], which owns all scanning state so that one instance can
//! be restarted over any number of buffers.
//!
//! ## Architecture
//!
//! ```text
//! FileAnalyzer
//!     ↓  restart / next_token / token_is_error
//! Lexer (trait)
//!     ↓
//! ScanAdapter<R>  ── cursor + stack of (buffer, mode) frames
//!     ↓  scan(mode, input)
//! ScanRules (e.g. StandardRules over logos)
//! ```

mod adapter;
mod rules;
mod standard;

use crate::text::Token;

pub use adapter::{ScanAdapter, ScanFrame};
pub use rules::{ModeAction, ScanRules, Scanned};
pub use standard::{StandardLexer, StandardMode, StandardRules, SyntaxKind};

/// Polymorphic scanning interface.
///
/// Callers restart the lexer over a buffer, then pull tokens with
/// [`next_token`](Lexer::next_token) until one is EOF.
pub trait Lexer: Send {
    /// Reset all scanning state to a single base entry over `text`.
    ///
    /// Nothing from a previous buffer may survive: cursor, nested buffers
    /// and mode stack are all discarded.
    fn restart(&mut self, text: &str);

    /// Scan and return the next token, advancing the cursor.
    fn next_token(&mut self) -> Token;

    /// Whether `token` signals a lexical error.
    fn token_is_error(&self, token: &Token) -> bool;

    /// The most recently produced token.
    fn last_token(&self) -> Token;
}

impl<L: Lexer + ?Sized> Lexer for Box<L> {
    fn restart(&mut self, text: &str) {
        (**self).restart(text)
    }

    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }

    fn token_is_error(&self, token: &Token) -> bool {
        (**self).token_is_error(token)
    }

    fn last_token(&self) -> Token {
        (**self).last_token()
    }
}
