//! Parallel batch runs over independent units.

use syntaxis::{
    AnalysisError, RunState, SourceUnit, StandardLexer, StandardRules, StatementParser,
    analyze_units,
};

use crate::helpers::source_fixtures::*;

fn run(units: &[SourceUnit]) -> Vec<syntaxis::UnitReport> {
    analyze_units(
        units,
        StandardLexer::default,
        StatementParser::new,
        StandardRules::is_significant,
    )
}

#[test]
fn test_mixed_batch() {
    let units = [
        SourceUnit::new("ok.src", STATEMENTS),
        SourceUnit::new("lex.src", CONTROL_CHAR),
        SourceUnit::new("syntax.src", TWO_BAD_STATEMENTS),
        SourceUnit::new("empty.src", EMPTY),
    ];
    let reports = run(&units);

    let names: Vec<&str> = reports.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["ok.src", "lex.src", "syntax.src", "empty.src"]);

    assert!(reports[0].is_ok());
    assert_eq!(reports[0].state, RunState::Parsed);

    assert!(matches!(reports[1].result, Err(AnalysisError::Lexical)));
    assert_eq!(reports[1].messages.len(), 1);
    assert!(reports[1].messages[0].starts_with("lex.src:1:2: lexical error"));

    assert!(matches!(
        reports[2].result,
        Err(AnalysisError::Syntax { rejected: 2 })
    ));
    assert!(reports[2].messages[1].starts_with("syntax.src:2:9: syntax error"));

    assert!(reports[3].is_ok());
    assert!(reports[3].messages.is_empty());
}

#[test]
fn test_batch_matches_sequential_runs() {
    let units: Vec<SourceUnit> = [SIMPLE_LET, MISSING_NAME, UNTERMINATED, COMMENTED]
        .iter()
        .enumerate()
        .map(|(i, text)| SourceUnit::new(format!("u{i}"), *text))
        .collect();

    let reports = run(&units);
    for (unit, report) in units.iter().zip(&reports) {
        let (analyzer, result) = crate::helpers::analysis_helpers::analyze(&unit.text);
        assert_eq!(report.result.is_ok(), result.is_ok());
        assert_eq!(report.state, analyzer.state());
        assert_eq!(report.messages.len(), analyzer.rejected_tokens().len());
    }
}
