//! The seam between the adapter and a concrete scanner.

use std::fmt::Debug;

use crate::text::TokenKind;

/// What the adapter does with its frame stack after a token is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction<M> {
    /// Keep scanning in the current mode.
    Stay,
    /// Enter `M` over the rest of the current buffer.
    Push(M),
    /// Return to the enclosing mode.
    Pop,
    /// Scan the next `len` bytes as a nested buffer in mode `mode`. The
    /// frame is dropped once its buffer is exhausted.
    Enter { mode: M, len: usize },
}

/// One scanned token, as reported by [`ScanRules::scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned<M> {
    pub kind: TokenKind,
    /// Length in bytes, counted from the start of the scanned input.
    pub len: usize,
    pub action: ModeAction<M>,
}

impl<M> Scanned<M> {
    pub fn new(kind: TokenKind, len: usize) -> Self {
        Self {
            kind,
            len,
            action: ModeAction::Stay,
        }
    }

    pub fn with_action(mut self, action: ModeAction<M>) -> Self {
        self.action = action;
        self
    }
}

/// A scanning specification: for every mode, how to recognize the token at
/// the start of some input.
pub trait ScanRules: Send + 'static {
    type Mode: Copy + Eq + Debug + Send;

    /// The mode every buffer starts in.
    const INITIAL: Self::Mode;

    /// Recognize one token at the start of `input` (never empty).
    ///
    /// `None` means no rule applies; the adapter then skips input to keep
    /// making progress. Rule sets should prefer returning an explicit error
    /// kind so the bad input reaches the caller.
    fn scan(mode: Self::Mode, input: &str) -> Option<Scanned<Self::Mode>>;

    /// Whether `kind` is this rule set's lexical error kind.
    fn is_error(kind: TokenKind) -> bool;
}
