//! Recursive descent parser for the standard rule set
//!
//! Builds a rowan GreenNode tree from the significant tokens.
//! Recovers at statement boundaries and always produces a root.
//!
//! ```text
//! SourceFile = Stmt*
//! Stmt       = 'let' IDENT '=' Expr ';'
//!            | DIRECTIVE DIRECTIVE_TEXT*
//!            | Expr ';'
//! Expr       = Atom (BinOp Atom)*
//! Atom       = IDENT ('(' (Expr (',' Expr)*)? ')')?
//!            | INTEGER | STRING | 'true' | 'false'
//!            | '(' Expr ')'
//! ```

use rowan::{GreenNode, GreenNodeBuilder};
use tracing::trace;

use super::{Parser, ParserInput};
use crate::analysis::AnalysisError;
use crate::lexer::SyntaxKind;
use crate::text::Token;

/// Reference [`Parser`] for [`StandardRules`](crate::lexer::StandardRules) tokens
#[derive(Debug, Default)]
pub struct StatementParser {
    root: Option<GreenNode>,
    rejected: Vec<Token>,
}

impl StatementParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parser for StatementParser {
    fn parse(&mut self, input: ParserInput<'_>) -> Result<(), AnalysisError> {
        let tokens: Vec<Token> = input.significant_tokens().copied().collect();
        let mut state = ParseState::new(input.text, &tokens);
        state.parse_source_file();
        let (root, rejected) = state.finish();
        trace!(rejected = rejected.len(), "statement parse finished");

        self.root = Some(root);
        self.rejected = rejected;
        if self.rejected.is_empty() {
            Ok(())
        } else {
            Err(AnalysisError::syntax(self.rejected.len()))
        }
    }

    fn take_root(&mut self) -> Option<GreenNode> {
        self.root.take()
    }

    fn rejected_tokens(&self) -> &[Token] {
        &self.rejected
    }
}

/// Deepest expression nesting accepted before the parser gives up on a
/// statement.
const MAX_EXPR_DEPTH: usize = 256;

/// The parser state
struct ParseState<'a> {
    text: &'a str,
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    builder: GreenNodeBuilder<'static>,
    rejected: Vec<Token>,
}

impl<'a> ParseState<'a> {
    fn new(text: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            text,
            tokens,
            pos: 0,
            depth: 0,
            builder: GreenNodeBuilder::new(),
            rejected: Vec::new(),
        }
    }

    fn finish(self) -> (GreenNode, Vec<Token>) {
        (self.builder.finish(), self.rejected)
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.kind_at(self.pos)
    }

    fn kind_at(&self, pos: usize) -> SyntaxKind {
        match self.tokens.get(pos) {
            Some(token) => SyntaxKind::try_from(token.kind).unwrap_or(SyntaxKind::ERROR),
            None => SyntaxKind::EOF,
        }
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EOF)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if self.at_eof() {
            return;
        }
        if let Some(&token) = self.current() {
            self.builder.token(token.kind.into(), token.text(self.text));
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> Option<()> {
        if self.at(kind) {
            self.bump();
            Some(())
        } else {
            self.reject()
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    /// Record the current token (EOF included) as rejected.
    fn reject(&mut self) -> Option<()> {
        let token = self
            .current()
            .copied()
            .or_else(|| self.tokens.last().copied());
        if let Some(token) = token {
            trace!(%token, "rejected token");
            self.rejected.push(token);
        }
        None
    }

    /// Skip to just past the next `;`, wrapping what was skipped.
    fn recover(&mut self) {
        self.builder.start_node(SyntaxKind::ERROR.into());
        while !self.at_eof() && !self.at(SyntaxKind::SEMICOLON) {
            self.bump();
        }
        if self.at(SyntaxKind::SEMICOLON) {
            self.bump();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn node(
        &mut self,
        kind: SyntaxKind,
        body: impl FnOnce(&mut Self) -> Option<()>,
    ) -> Option<()> {
        self.builder.start_node(kind.into());
        let result = body(self);
        self.builder.finish_node();
        result
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());
        while !self.at_eof() {
            self.parse_statement();
        }
        self.builder.finish_node();
    }

    fn parse_statement(&mut self) {
        let kind = match self.current_kind() {
            SyntaxKind::LET_KW => SyntaxKind::LET_STMT,
            SyntaxKind::DIRECTIVE => SyntaxKind::DIRECTIVE_STMT,
            _ => SyntaxKind::EXPR_STMT,
        };
        self.builder.start_node(kind.into());
        let parsed = match kind {
            SyntaxKind::LET_STMT => self.parse_let_body(),
            SyntaxKind::DIRECTIVE_STMT => {
                self.parse_directive_body();
                Some(())
            }
            _ => self.parse_expr().and_then(|()| self.expect(SyntaxKind::SEMICOLON)),
        };
        if parsed.is_none() {
            self.recover();
        }
        self.builder.finish_node();
    }

    /// 'let' IDENT '=' Expr ';'
    fn parse_let_body(&mut self) -> Option<()> {
        self.expect(SyntaxKind::LET_KW)?;
        self.expect(SyntaxKind::IDENT)?;
        self.expect(SyntaxKind::EQ)?;
        self.parse_expr()?;
        self.expect(SyntaxKind::SEMICOLON)
    }

    fn parse_directive_body(&mut self) {
        self.bump();
        while self.at(SyntaxKind::DIRECTIVE_TEXT) {
            self.bump();
        }
    }

    /// Expr, bounded by [`MAX_EXPR_DEPTH`]. Past the limit the current token
    /// is rejected and the enclosing statement recovers.
    fn parse_expr(&mut self) -> Option<()> {
        if self.depth >= MAX_EXPR_DEPTH {
            trace!(depth = self.depth, "expression nesting limit reached");
            return self.reject();
        }
        self.depth += 1;
        let result = self.parse_binary_expr();
        self.depth -= 1;
        result
    }

    /// Atom (BinOp Atom)*, left-associative
    fn parse_binary_expr(&mut self) -> Option<()> {
        let checkpoint = self.builder.checkpoint();
        self.parse_atom()?;
        while self.current_kind().is_binary_op() {
            self.builder
                .start_node_at(checkpoint, SyntaxKind::BINARY_EXPR.into());
            self.bump();
            let rhs = self.parse_atom();
            self.builder.finish_node();
            rhs?;
        }
        Some(())
    }

    fn parse_atom(&mut self) -> Option<()> {
        match self.current_kind() {
            SyntaxKind::IDENT if self.kind_at(self.pos + 1) == SyntaxKind::L_PAREN => {
                self.node(SyntaxKind::CALL_EXPR, |p| {
                    p.node(SyntaxKind::NAME_REF, |p| p.expect(SyntaxKind::IDENT))?;
                    p.node(SyntaxKind::ARG_LIST, Self::parse_arg_list)
                })
            }
            SyntaxKind::IDENT => self.node(SyntaxKind::NAME_REF, |p| p.expect(SyntaxKind::IDENT)),
            SyntaxKind::INTEGER | SyntaxKind::STRING | SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => {
                self.node(SyntaxKind::LITERAL, |p| {
                    p.bump();
                    Some(())
                })
            }
            SyntaxKind::L_PAREN => self.node(SyntaxKind::PAREN_EXPR, |p| {
                p.bump();
                p.parse_expr()?;
                p.expect(SyntaxKind::R_PAREN)
            }),
            _ => self.reject(),
        }
    }

    /// '(' (Expr (',' Expr)*)? ')'
    fn parse_arg_list(&mut self) -> Option<()> {
        self.expect(SyntaxKind::L_PAREN)?;
        if !self.at(SyntaxKind::R_PAREN) {
            self.parse_expr()?;
            while self.at(SyntaxKind::COMMA) {
                self.bump();
                self.parse_expr()?;
            }
        }
        self.expect(SyntaxKind::R_PAREN)
    }
}
