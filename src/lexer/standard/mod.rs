//! Standard rule set: a small C-family token language on top of logos.
//!
//! Two modes. `Initial` covers ordinary source text. A `#name` directive
//! opens a nested buffer reaching to the end of its line, which is scanned
//! in `Directive` mode as raw text chunks.

mod syntax_kind;
mod tokens;

use logos::Logos;

use super::adapter::ScanAdapter;
use super::rules::{ModeAction, ScanRules, Scanned};
use crate::text::{Token, TokenKind};

pub use syntax_kind::SyntaxKind;
use tokens::{DirectiveToken, InitialToken};

/// A lexer over the standard rule set.
pub type StandardLexer = ScanAdapter<StandardRules>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardMode {
    Initial,
    Directive,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl StandardRules {
    /// Stock significance policy: everything except trivia.
    pub fn is_significant(token: &Token) -> bool {
        !SyntaxKind::try_from(token.kind).is_ok_and(SyntaxKind::is_trivia)
    }
}

/// Run one logos lexer step over `input`, turning a failed match into an
/// explicit error token.
fn scan_one<'s, T>(input: &'s str) -> Option<(SyntaxKind, usize)>
where
    T: Logos<'s, Source = str> + Into<SyntaxKind>,
    T::Extras: Default,
{
    let mut lexer = T::lexer(input);
    let result = lexer.next()?;
    let end = lexer.span().end;
    match result {
        Ok(token) => Some((token.into(), end)),
        Err(_) => Some((SyntaxKind::ERROR, error_len(input, end))),
    }
}

/// Length of an error token: at least one whole character.
fn error_len(input: &str, end: usize) -> usize {
    let min = input.chars().next().map_or(0, char::len_utf8);
    let mut len = end.clamp(min, input.len());
    while !input.is_char_boundary(len) {
        len += 1;
    }
    len
}

impl ScanRules for StandardRules {
    type Mode = StandardMode;
    const INITIAL: StandardMode = StandardMode::Initial;

    fn scan(mode: StandardMode, input: &str) -> Option<Scanned<StandardMode>> {
        match mode {
            StandardMode::Initial => {
                let (kind, len) = scan_one::<InitialToken>(input)?;
                let scanned = Scanned::new(kind.into(), len);
                if kind != SyntaxKind::DIRECTIVE {
                    return Some(scanned);
                }
                let rest = &input[len..];
                let line_len = rest.find('\n').unwrap_or(rest.len());
                if line_len == 0 {
                    return Some(scanned);
                }
                Some(scanned.with_action(ModeAction::Enter {
                    mode: StandardMode::Directive,
                    len: line_len,
                }))
            }
            StandardMode::Directive => {
                let (kind, len) = scan_one::<DirectiveToken>(input)?;
                Some(Scanned::new(kind.into(), len))
            }
        }
    }

    fn is_error(kind: TokenKind) -> bool {
        kind == SyntaxKind::ERROR
    }
}
