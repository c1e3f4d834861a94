//! Parallel analysis of independent source units.
//!
//! Each unit gets its own lexer and parser from the supplied factories, so
//! nothing is shared between workers except the factories themselves.

use rayon::prelude::*;
use tracing::debug;

use super::error::AnalysisError;
use super::file_analyzer::{FileAnalyzer, RunState};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::text::Token;

/// One unit of input: a name for diagnostics and its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub filename: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// Outcome of analyzing one [`SourceUnit`].
#[derive(Debug)]
pub struct UnitReport {
    pub filename: String,
    pub result: Result<(), AnalysisError>,
    pub state: RunState,
    /// Linter-style messages, one per rejected token.
    pub messages: Vec<String>,
}

impl UnitReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Analyze `units` in parallel, returning one report per unit in input order.
///
/// `filter` is the significance policy applied to every unit's token view.
pub fn analyze_units<L, P, ML, MP, F>(
    units: &[SourceUnit],
    make_lexer: ML,
    make_parser: MP,
    filter: F,
) -> Vec<UnitReport>
where
    L: Lexer,
    P: Parser,
    ML: Fn() -> L + Sync,
    MP: Fn() -> P + Sync,
    F: Fn(&Token) -> bool + Clone + Send + Sync + 'static,
{
    let reports: Vec<UnitReport> = units
        .par_iter()
        .map(|unit| {
            let mut analyzer =
                FileAnalyzer::new(unit.text.as_str(), unit.filename.as_str())
                    .with_filter(filter.clone());
            let mut lexer = make_lexer();
            let mut parser = make_parser();
            let result = analyzer.analyze(&mut lexer, &mut parser);
            UnitReport {
                filename: unit.filename.clone(),
                state: analyzer.state(),
                messages: analyzer.linter_token_error_messages(),
                result,
            }
        })
        .collect();

    let failed = reports.iter().filter(|report| !report.is_ok()).count();
    debug!(units = reports.len(), failed, "batch analysis finished");
    reports
}
