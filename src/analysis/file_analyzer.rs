//! Drives one source unit through lexing and parsing.

use std::fmt;
use std::path::Path;

use tracing::{debug, error, trace};

use super::diagnostics::{linter_token_error_message, token_error_message};
use super::error::AnalysisError;
use super::rejected::{AnalysisPhase, RejectedToken};
use crate::lexer::Lexer;
use crate::parser::{Parser, ParserInput};
use crate::text::{SyntaxTree, TextStructure, Token};

/// Where a run currently stands.
///
/// ```text
/// Init → Tokenizing → LexError
///                   → Tokenized → Parsing → ParseError
///                                         → Parsed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Init,
    Tokenizing,
    LexError,
    Tokenized,
    Parsing,
    ParseError,
    Parsed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Tokenizing => "tokenizing",
            Self::LexError => "lex-error",
            Self::Tokenized => "tokenized",
            Self::Parsing => "parsing",
            Self::ParseError => "parse-error",
            Self::Parsed => "parsed",
        }
    }

    /// No further step is possible from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::LexError | Self::ParseError | Self::Parsed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type TokenFilter = Box<dyn Fn(&Token) -> bool + Send + Sync>;

/// Owns one unit's text structure for the length of a run.
///
/// Lexical errors stop at the first error token; syntax errors are
/// collected from the parser after it has done its own recovery, and the
/// partial tree is kept either way.
pub struct FileAnalyzer {
    filename: String,
    data: TextStructure,
    filter: TokenFilter,
    rejected_tokens: Vec<RejectedToken>,
    state: RunState,
}

impl fmt::Debug for FileAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAnalyzer")
            .field("filename", &self.filename)
            .field("state", &self.state)
            .field("rejected_tokens", &self.rejected_tokens)
            .finish_non_exhaustive()
    }
}

impl FileAnalyzer {
    /// Analyzer over `text`. The view keeps every token until a filter is set
    /// with [`with_filter`](Self::with_filter).
    pub fn new(text: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            data: TextStructure::new(text),
            filter: Box::new(|_| true),
            rejected_tokens: Vec::new(),
            state: RunState::Init,
        }
    }

    /// Read a unit from disk; the path becomes the diagnostic filename.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(text, path.display().to_string()))
    }

    /// Set the significance policy used to build the token stream view.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Token) -> bool + Send + Sync + 'static,
    {
        self.filter = Box::new(filter);
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn data(&self) -> &TextStructure {
        &self.data
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn rejected_tokens(&self) -> &[RejectedToken] {
        &self.rejected_tokens
    }

    pub fn syntax_tree(&self) -> Option<&SyntaxTree> {
        self.data.syntax_tree()
    }

    /// Move the syntax tree out, e.g. to hand it to later passes.
    pub fn take_syntax_tree(&mut self) -> Option<SyntaxTree> {
        self.data.take_syntax_tree()
    }

    fn check_state(&self, expected: RunState, operation: &'static str) -> Result<(), AnalysisError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(AnalysisError::OutOfOrder {
                operation,
                state: self.state,
            })
        }
    }

    /// Pull tokens from `lexer` until EOF, then build the token view.
    ///
    /// Stops at the first error token, recording it as the single lexical
    /// rejection of this run.
    pub fn tokenize(&mut self, lexer: &mut dyn Lexer) -> Result<(), AnalysisError> {
        self.check_state(RunState::Init, "tokenize")?;
        self.state = RunState::Tokenizing;
        trace!(filename = %self.filename, "tokenizing");

        lexer.restart(self.data.contents());
        loop {
            let token = lexer.next_token();
            self.data.tokens_mut().push(token);
            if lexer.token_is_error(&token) {
                debug!(filename = %self.filename, %token, "lexical error");
                self.rejected_tokens
                    .push(RejectedToken::new(token, AnalysisPhase::Lexical));
                self.state = RunState::LexError;
                return Err(AnalysisError::Lexical);
            }
            if token.is_eof() {
                break;
            }
        }

        // Pin EOF to an empty range at the end of the buffer, whatever span
        // the scanner gave it, so it cannot overlap the previous token.
        let eof = self.data.eof_token();
        if let Some(last) = self.data.tokens_mut().last_mut() {
            *last = eof;
        }

        self.data.calculate_first_tokens_per_line();
        self.data.init_token_stream_view(&self.filter);
        self.state = RunState::Tokenized;
        Ok(())
    }

    /// Run `parser` over the token view and take its tree.
    ///
    /// The tree is taken even when parsing fails; the parser's rejections
    /// are then appended as syntax-phase rejections and its result is
    /// returned as is.
    ///
    /// # Panics
    ///
    /// If the parser reports success without producing a tree.
    pub fn parse(&mut self, parser: &mut dyn Parser) -> Result<(), AnalysisError> {
        self.check_state(RunState::Tokenized, "parse")?;
        self.state = RunState::Parsing;

        let result = parser.parse(ParserInput {
            text: self.data.contents(),
            tokens: self.data.tokens(),
            view: self.data.token_stream_view(),
        });
        self.data.set_syntax_tree(parser.take_root());

        match &result {
            Ok(()) => {
                if self.data.syntax_tree().is_none() {
                    error!(filename = %self.filename, "parser succeeded without a tree");
                    panic!(
                        "Expected syntax tree from parsing \"{}\", but got none.",
                        self.filename
                    );
                }
                self.state = RunState::Parsed;
            }
            Err(err) => {
                debug!(filename = %self.filename, %err, "parse failed");
                self.rejected_tokens.extend(
                    parser
                        .rejected_tokens()
                        .iter()
                        .map(|&token| RejectedToken::new(token, AnalysisPhase::Syntax)),
                );
                self.state = RunState::ParseError;
            }
        }
        result
    }

    /// Tokenize, then parse if tokenizing succeeded.
    pub fn analyze(
        &mut self,
        lexer: &mut dyn Lexer,
        parser: &mut dyn Parser,
    ) -> Result<(), AnalysisError> {
        self.tokenize(lexer)?;
        self.parse(parser)
    }

    /// One compact `token: ...` message per rejection, in discovery order.
    pub fn token_error_messages(&self) -> Vec<String> {
        self.rejected_tokens
            .iter()
            .map(|rejected| token_error_message(&self.data, &rejected.token))
            .collect()
    }

    /// One linter-style message per rejection, in discovery order.
    pub fn linter_token_error_messages(&self) -> Vec<String> {
        self.rejected_tokens
            .iter()
            .map(|rejected| linter_token_error_message(&self.data, &self.filename, rejected))
            .collect()
    }
}
