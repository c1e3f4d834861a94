//! # syntaxis-base
//!
//! Language-agnostic front end for single-file analysis: lex a source unit,
//! filter the token stream, parse it, and report every rejected token with
//! stable line:column diagnostics.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis  → FileAnalyzer, rejected tokens, diagnostics, batch runs
//!   ↓
//! parser    → Parser trait, reference statement parser (rowan)
//!   ↓
//! lexer     → Lexer trait, ScanRules/ScanAdapter, standard logos rules
//!   ↓
//! text      → Token, TokenStreamView, TextStructure
//!   ↓
//! base      → LineColumn, LineColumnMap, TextRange/TextSize
//! ```
//!
//! ## Example
//!
//! ```
//! use syntaxis::{FileAnalyzer, StandardLexer, StandardRules, StatementParser};
//!
//! let mut analyzer = FileAnalyzer::new("let x = ;\n", "unit.src")
//!     .with_filter(StandardRules::is_significant);
//! let result = analyzer.analyze(&mut StandardLexer::default(), &mut StatementParser::new());
//! assert!(result.is_err());
//! assert_eq!(analyzer.token_error_messages(), vec!["token: \";\" at 1:9"]);
//! ```

// ============================================================================
// MODULES (dependency order: base → text → lexer → parser → analysis)
// ============================================================================

/// Foundation types: line/column mapping, TextRange
pub mod base;

/// Tokens, token views and the per-unit text structure
pub mod text;

/// Lexer trait, scan-rule adapter and the standard rule set
pub mod lexer;

/// Parser trait and the reference statement parser
pub mod parser;

/// FileAnalyzer, rejected tokens and diagnostics
pub mod analysis;

// Re-export the run surface
pub use analysis::{
    AnalysisError, AnalysisPhase, FileAnalyzer, RejectedToken, RunState, SourceUnit, UnitReport,
    analyze_units,
};
pub use lexer::{Lexer, StandardLexer, StandardRules, SyntaxKind};
pub use parser::{Parser, ParserInput, StatementParser};

// Re-export foundation types
pub use base::{LineColumn, LineColumnMap, TextRange, TextSize};
pub use text::{SyntaxTree, TextStructure, Token, TokenKind, TokenStreamView};
