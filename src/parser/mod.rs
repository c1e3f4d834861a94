//! Parser collaborator interface
//!
//! The analysis core hands a parser the filtered token view and takes back
//! a (possibly partial) rowan green tree plus the tokens it rejected.
//!
//! ```text
//! TokenStreamView (significant tokens, EOF last)
//!     ↓
//! Parser::parse → Result
//!     ↓
//! Parser::take_root → GreenNode (also after errors)
//! Parser::rejected_tokens → tokens reported as syntax errors
//! ```
//!
//! [`StatementParser`] is a small recursive-descent implementation for the
//! standard rule set.

mod statement;

use crate::analysis::AnalysisError;
use crate::text::{SyntaxTree, Token, TokenStreamView};

pub use statement::StatementParser;

/// Everything a parser may read during one run.
#[derive(Debug, Clone, Copy)]
pub struct ParserInput<'a> {
    pub text: &'a str,
    pub tokens: &'a [Token],
    pub view: &'a TokenStreamView,
}

impl<'a> ParserInput<'a> {
    /// The viewed tokens, in order, ending with EOF.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &'a Token> + 'a {
        self.view.tokens(self.tokens)
    }
}

/// A parser that can be driven by [`FileAnalyzer`](crate::analysis::FileAnalyzer).
pub trait Parser: Send {
    /// Parse the viewed tokens. Errors are reported through the result and
    /// [`rejected_tokens`](Parser::rejected_tokens); recovery is up to the
    /// implementation.
    fn parse(&mut self, input: ParserInput<'_>) -> Result<(), AnalysisError>;

    /// Move the tree root out of the parser.
    ///
    /// Returning `None` after a successful parse is a bug in the parser.
    fn take_root(&mut self) -> Option<SyntaxTree>;

    /// Tokens rejected by the last [`parse`](Parser::parse), in order.
    fn rejected_tokens(&self) -> &[Token];
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse(&mut self, input: ParserInput<'_>) -> Result<(), AnalysisError> {
        (**self).parse(input)
    }

    fn take_root(&mut self) -> Option<SyntaxTree> {
        (**self).take_root()
    }

    fn rejected_tokens(&self) -> &[Token] {
        (**self).rejected_tokens()
    }
}
