//! Adapts any [`ScanRules`] to the [`Lexer`] interface.

use std::marker::PhantomData;
use std::sync::Arc;

use text_size::{TextRange, TextSize};
use tracing::{debug, error, trace};

use super::Lexer;
use super::rules::{ModeAction, ScanRules};
use crate::text::Token;

/// One entry of the adapter's buffer/mode stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanFrame<M> {
    pub mode: M,
    /// Region of the text this frame scans. The base frame spans the whole
    /// text; nested frames span a sub-range.
    pub buffer: TextRange,
}

/// Drives a rule set over a private copy of the text.
///
/// The stack always holds at least the base frame. [`Lexer::restart`]
/// truncates it back to that single entry. Offsets are `TextSize` (`u32`),
/// so texts must be shorter than 4 GiB.
#[derive(Debug)]
pub struct ScanAdapter<R: ScanRules> {
    text: Arc<str>,
    cursor: TextSize,
    stack: Vec<ScanFrame<R::Mode>>,
    last_token: Token,
    _rules: PhantomData<fn() -> R>,
}

impl<R: ScanRules> ScanAdapter<R> {
    pub fn new(text: &str) -> Self {
        let text: Arc<str> = Arc::from(text);
        let len = TextSize::of(&*text);
        Self {
            text,
            cursor: TextSize::new(0),
            stack: vec![ScanFrame {
                mode: R::INITIAL,
                buffer: TextRange::up_to(len),
            }],
            last_token: Token::eof(TextSize::new(0)),
            _rules: PhantomData,
        }
    }

    /// Current nesting depth; 1 means only the base frame.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn mode(&self) -> R::Mode {
        self.top().mode
    }

    pub fn cursor(&self) -> TextSize {
        self.cursor
    }

    fn top(&self) -> &ScanFrame<R::Mode> {
        // the base frame is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn end_of_text(&self) -> TextSize {
        TextSize::of(&*self.text)
    }

    /// Abort on a broken scanning specification. Not a user error.
    fn fatal(&self, message: &str) -> ! {
        error!(
            cursor = u32::from(self.cursor),
            mode = ?self.mode(),
            "fatal scanner error: {message}"
        );
        panic!("fatal scanner error at offset {}: {message}", u32::from(self.cursor));
    }

    /// Cursor position `len` bytes ahead. Offsets are `u32`, so buffers are
    /// limited to 4 GiB; anything past that is treated as a scanner fault.
    fn offset_after(&self, len: usize) -> TextSize {
        TextSize::try_from(len)
            .ok()
            .and_then(|len| self.cursor.checked_add(len))
            .unwrap_or_else(|| self.fatal("offset exceeds the 4 GiB text limit"))
    }

    /// Last-resort guard for input no rule accepts: skip one character.
    fn skip_unrecognized(&mut self) {
        let start = usize::from(self.cursor);
        let width = self.text[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let end = self.offset_after(width);
        debug!(
            rejected = &self.text[start..usize::from(end)],
            "no scanning rule matched; skipping"
        );
        self.cursor = end;
    }

    fn apply(&mut self, action: ModeAction<R::Mode>) {
        match action {
            ModeAction::Stay => {}
            ModeAction::Push(mode) => {
                let buffer = self.top().buffer;
                self.stack.push(ScanFrame { mode, buffer });
            }
            ModeAction::Pop => {
                if self.stack.len() == 1 {
                    self.fatal("pop of the base scanning mode");
                }
                self.stack.pop();
            }
            ModeAction::Enter { mode, len } => {
                let end = self.offset_after(len);
                if end > self.top().buffer.end() {
                    self.fatal("nested buffer extends past its parent");
                }
                if !self.text.is_char_boundary(usize::from(end)) {
                    self.fatal("nested buffer ends inside a character");
                }
                self.stack.push(ScanFrame {
                    mode,
                    buffer: TextRange::new(self.cursor, end),
                });
            }
        }
    }
}

impl<R: ScanRules> Default for ScanAdapter<R> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<R: ScanRules> Lexer for ScanAdapter<R> {
    fn restart(&mut self, text: &str) {
        self.text = Arc::from(text);
        self.cursor = TextSize::new(0);
        self.stack.truncate(1);
        self.stack[0] = ScanFrame {
            mode: R::INITIAL,
            buffer: TextRange::up_to(self.end_of_text()),
        };
        self.last_token = Token::eof(TextSize::new(0));
        trace!(len = text.len(), "lexer restarted");
    }

    fn next_token(&mut self) -> Token {
        loop {
            let frame = *self.top();
            if self.cursor >= frame.buffer.end() {
                if self.stack.len() > 1 {
                    self.stack.pop();
                    continue;
                }
                self.last_token = Token::eof(self.end_of_text());
                return self.last_token;
            }

            let input = &self.text[usize::from(self.cursor)..usize::from(frame.buffer.end())];
            let Some(scanned) = R::scan(frame.mode, input) else {
                self.skip_unrecognized();
                continue;
            };
            if scanned.len == 0 {
                self.fatal("rule matched empty input");
            }
            if scanned.len > input.len() || !input.is_char_boundary(scanned.len) {
                self.fatal("rule matched past its buffer");
            }

            let start = self.cursor;
            self.cursor = self.offset_after(scanned.len);
            self.last_token = Token::new(scanned.kind, TextRange::new(start, self.cursor));
            self.apply(scanned.action);
            return self.last_token;
        }
    }

    fn token_is_error(&self, token: &Token) -> bool {
        R::is_error(token.kind)
    }

    fn last_token(&self) -> Token {
        self.last_token
    }
}
