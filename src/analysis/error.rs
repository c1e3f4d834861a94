//! Error types for analysis runs.

use std::path::PathBuf;

use thiserror::Error;

use super::file_analyzer::RunState;

/// Errors returned by [`FileAnalyzer`](super::FileAnalyzer) and parsers.
///
/// Lexical and syntax errors are ordinary outcomes of bad input; the
/// offending tokens are kept as [`RejectedToken`](super::RejectedToken)s on
/// the analyzer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Tokenizing stopped at the first error token.
    #[error("Lexical error.")]
    Lexical,

    /// The parser rejected one or more tokens.
    #[error("Syntax error: {rejected} rejected token(s).")]
    Syntax { rejected: usize },

    /// A run step was invoked in the wrong state.
    #[error("cannot {operation} in state {state}")]
    OutOfOrder {
        operation: &'static str,
        state: RunState,
    },

    /// The source unit could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    pub fn syntax(rejected: usize) -> Self {
        Self::Syntax { rejected }
    }

    /// Whether this error came from the input (lexical or syntax) rather
    /// than from how the analyzer was driven.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Lexical | Self::Syntax { .. })
    }
}
