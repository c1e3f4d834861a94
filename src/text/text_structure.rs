//! Per-unit owner of text, tokens, view and syntax tree.

use text_size::TextSize;

use super::token::{Token, TokenSequence};
use super::token_stream_view::TokenStreamView;
use crate::base::{LineColumnMap, TextRange};

/// Root of a (possibly partial) concrete syntax tree.
pub type SyntaxTree = rowan::GreenNode;

/// Everything derived from one source buffer during a run.
///
/// The contents and the line/column map are fixed at construction; tokens,
/// view and tree are filled in by [`FileAnalyzer`](crate::analysis::FileAnalyzer).
#[derive(Debug, Clone)]
pub struct TextStructure {
    contents: String,
    line_column_map: LineColumnMap,
    tokens: TokenSequence,
    view: TokenStreamView,
    /// `first_tokens[line]` is the index of the first token starting at or
    /// after the start of `line`.
    first_tokens: Vec<usize>,
    syntax_tree: Option<SyntaxTree>,
}

impl TextStructure {
    pub fn new(contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let line_column_map = LineColumnMap::new(&contents);
        Self {
            contents,
            line_column_map,
            tokens: Vec::new(),
            view: TokenStreamView::default(),
            first_tokens: Vec::new(),
            syntax_tree: None,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn line_column_map(&self) -> &LineColumnMap {
        &self.line_column_map
    }

    /// The canonical EOF token for this buffer.
    pub fn eof_token(&self) -> Token {
        Token::eof(TextSize::of(self.contents.as_str()))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut TokenSequence {
        &mut self.tokens
    }

    pub fn token_stream_view(&self) -> &TokenStreamView {
        &self.view
    }

    /// Rebuild the filtered view over the current token sequence.
    pub(crate) fn init_token_stream_view<F>(&mut self, keep: F)
    where
        F: Fn(&Token) -> bool,
    {
        self.view = TokenStreamView::new(&self.tokens, keep);
    }

    /// Index, for every source line, the first token starting on or after it.
    pub(crate) fn calculate_first_tokens_per_line(&mut self) {
        let tokens = &self.tokens;
        self.first_tokens = self
            .line_column_map
            .line_starts()
            .iter()
            .map(|&line_start| tokens.partition_point(|t| t.left() < line_start))
            .collect();
    }

    /// Tokens that start on `line` (0-based).
    ///
    /// Empty before tokenizing, for lines past the end, and for lines
    /// covered entirely by a token that started earlier.
    pub fn tokens_on_line(&self, line: usize) -> &[Token] {
        let Some(&begin) = self.first_tokens.get(line) else {
            return &[];
        };
        let end = self
            .first_tokens
            .get(line + 1)
            .copied()
            .unwrap_or(self.tokens.len());
        self.tokens.get(begin..end).unwrap_or(&[])
    }

    /// Text covered by `range`, or an empty string if it does not fit.
    pub fn text_in(&self, range: TextRange) -> &str {
        self.contents
            .get(std::ops::Range::<usize>::from(range))
            .unwrap_or("")
    }

    pub fn syntax_tree(&self) -> Option<&SyntaxTree> {
        self.syntax_tree.as_ref()
    }

    /// Install a new tree root, dropping whatever was held before.
    pub(crate) fn set_syntax_tree(&mut self, tree: Option<SyntaxTree>) {
        self.syntax_tree = tree;
    }

    pub(crate) fn take_syntax_tree(&mut self) -> Option<SyntaxTree> {
        self.syntax_tree.take()
    }
}
