use std::fmt;

use crate::text::Token;

/// Where in the pipeline a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisPhase {
    Lexical,
    Preprocessing,
    Syntax,
}

impl AnalysisPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Preprocessing => "preprocessing",
            Self::Syntax => "syntax",
        }
    }
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token flagged as erroneous, with the phase that flagged it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedToken {
    pub token: Token,
    pub phase: AnalysisPhase,
    /// Optional detail appended to linter-style messages; empty for none.
    pub explanation: String,
}

impl RejectedToken {
    pub fn new(token: Token, phase: AnalysisPhase) -> Self {
        Self {
            token,
            phase,
            explanation: String::new(),
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }
}
