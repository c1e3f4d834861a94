//! Analysis of one source unit: lexer → token view → parser → diagnostics.
//!
//! ```text
//! FileAnalyzer::tokenize ── first error token ──→ RejectedToken (lexical), stop
//!         ↓ ok
//! FileAnalyzer::parse ──── parser rejections ───→ RejectedToken (syntax), keep tree
//!         ↓
//! token_error_messages / linter_token_error_messages
//! ```

mod batch;
pub mod diagnostics;
mod error;
mod file_analyzer;
mod rejected;

pub use batch::{SourceUnit, UnitReport, analyze_units};
pub use error::AnalysisError;
pub use file_analyzer::{FileAnalyzer, RunState};
pub use rejected::{AnalysisPhase, RejectedToken};
