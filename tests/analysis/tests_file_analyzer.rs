//! End-to-end runs of FileAnalyzer with the standard lexer and parser.

use rstest::rstest;
use syntaxis::analysis::diagnostics::HELP_BASE_URL;
use syntaxis::{
    AnalysisError, AnalysisPhase, FileAnalyzer, StandardLexer, StandardRules, StatementParser,
    SyntaxKind, TextSize, Token,
};
use tempfile::TempDir;

use crate::helpers::analysis_helpers::{analyze, analyzer, kinds};
use crate::helpers::source_fixtures::*;

// ============================================================================
// SUCCESSFUL RUNS
// ============================================================================

#[test]
fn test_empty_input() {
    let (analyzer, result) = analyze(EMPTY);
    assert!(result.is_ok());
    assert_eq!(analyzer.data().tokens(), &[Token::eof(TextSize::new(0))]);
    assert_eq!(analyzer.data().token_stream_view().indices(), &[0]);
    assert!(analyzer.token_error_messages().is_empty());
    assert!(analyzer.linter_token_error_messages().is_empty());
    assert!(analyzer.syntax_tree().is_some());
}

#[rstest]
#[case(SIMPLE_LET)]
#[case(STATEMENTS)]
#[case(DIRECTIVE_ONLY)]
#[case(COMMENTED)]
fn test_valid_sources_parse(#[case] text: &str) {
    let (analyzer, result) = analyze(text);
    assert!(result.is_ok(), "{text:?} failed: {:?}", analyzer.linter_token_error_messages());
    assert!(analyzer.rejected_tokens().is_empty());
    assert_eq!(
        analyzer.syntax_tree().map(|tree| tree.kind()),
        Some(rowan::SyntaxKind::from(SyntaxKind::SOURCE_FILE))
    );
}

#[test]
fn test_eof_token_is_normalized() {
    let (analyzer, _) = analyze(SIMPLE_LET);
    let tokens = analyzer.data().tokens();
    let eof = tokens[tokens.len() - 1];
    assert!(eof.is_eof());
    assert_eq!(eof.left(), TextSize::of(SIMPLE_LET));
    assert_eq!(eof.right(), TextSize::of(SIMPLE_LET));
    assert_eq!(analyzer.data().eof_token(), eof);
}

#[test]
fn test_view_skips_trivia_and_ends_with_eof() {
    let (analyzer, _) = analyze(COMMENTED);
    let data = analyzer.data();
    let viewed: Vec<Token> = data.token_stream_view().tokens(data.tokens()).copied().collect();
    assert_eq!(
        kinds(&viewed),
        vec![
            SyntaxKind::LET_KW,
            SyntaxKind::IDENT,
            SyntaxKind::EQ,
            SyntaxKind::INTEGER,
            SyntaxKind::SEMICOLON,
            SyntaxKind::EOF,
        ]
    );
    let indices = data.token_stream_view().indices();
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(indices.last(), Some(&(data.tokens().len() - 1)));
}

#[test]
fn test_tokens_are_contiguous_over_contents() {
    let (analyzer, _) = analyze(STATEMENTS);
    let tokens = analyzer.data().tokens();
    let mut expected_start = TextSize::new(0);
    for token in &tokens[..tokens.len() - 1] {
        assert_eq!(token.left(), expected_start);
        expected_start = token.right();
    }
    assert_eq!(expected_start, TextSize::of(STATEMENTS));
}

#[test]
fn test_tokens_on_line() {
    let (analyzer, _) = analyze(STATEMENTS);
    let data = analyzer.data();
    let second_line: Vec<&str> = data
        .tokens_on_line(1)
        .iter()
        .map(|t| t.text(data.contents()))
        .collect();
    assert_eq!(second_line, vec!["#define", " ", "LIMIT", " ", "10", "\n"]);
    assert_eq!(data.tokens_on_line(3), &[data.eof_token()]);
    assert!(data.tokens_on_line(4).is_empty());
}

// ============================================================================
// LEXICAL ERRORS
// ============================================================================

#[test]
fn test_control_character_is_one_lexical_rejection() {
    let (analyzer, result) = analyze(CONTROL_CHAR);
    assert!(matches!(result, Err(AnalysisError::Lexical)));
    assert_eq!(analyzer.rejected_tokens().len(), 1);
    assert_eq!(analyzer.rejected_tokens()[0].phase, AnalysisPhase::Lexical);
    assert_eq!(analyzer.token_error_messages(), vec!["token: \"\u{1}\" at 1:2"]);
    assert_eq!(
        analyzer.linter_token_error_messages(),
        vec![format!("test.src:1:2: lexical error, rejected \"\u{1}\" ({HELP_BASE_URL}).")]
    );
    assert!(analyzer.syntax_tree().is_none());
}

#[test]
fn test_only_first_lexical_error_is_reported() {
    let (analyzer, _) = analyze("a \x01 \x02 b");
    assert_eq!(analyzer.rejected_tokens().len(), 1);
    assert_eq!(analyzer.token_error_messages(), vec!["token: \"\u{1}\" at 1:3"]);
}

#[test]
fn test_non_ascii_lexical_error_is_one_column() {
    let (analyzer, result) = analyze("a\u{e9}b");
    assert!(matches!(result, Err(AnalysisError::Lexical)));
    assert_eq!(analyzer.token_error_messages(), vec!["token: \"\u{e9}\" at 1:2"]);
}

// ============================================================================
// SYNTAX ERRORS
// ============================================================================

#[test]
fn test_two_character_rejection_is_one_position() {
    let (analyzer, result) = analyze("let x = == ;");
    assert!(result.is_err());
    assert_eq!(analyzer.token_error_messages(), vec!["token: \"==\" at 1:9"]);
}

#[test]
fn test_syntax_error_keeps_partial_tree() {
    let (analyzer, result) = analyze(MISSING_NAME);
    assert!(matches!(result, Err(AnalysisError::Syntax { rejected: 1 })));
    assert!(analyzer.syntax_tree().is_some());
    assert_eq!(analyzer.token_error_messages(), vec!["token: \"=\" at 1:5"]);
}

#[test]
fn test_multiple_syntax_errors_in_order() {
    let (analyzer, _) = analyze(TWO_BAD_STATEMENTS);
    assert_eq!(
        analyzer.token_error_messages(),
        vec!["token: \"=\" at 1:5", "token: \";\" at 2:9"]
    );
    assert!(
        analyzer
            .rejected_tokens()
            .iter()
            .all(|rejected| rejected.phase == AnalysisPhase::Syntax)
    );
}

#[test]
fn test_deep_nesting_is_a_syntax_error() {
    let depth = 100_000;
    let text = format!("{}1{};\nlet y = 2;\n", "(".repeat(depth), ")".repeat(depth));
    let (analyzer, result) = analyze(&text);
    assert!(matches!(result, Err(AnalysisError::Syntax { rejected: 1 })));
    assert!(analyzer.syntax_tree().is_some());
    assert_eq!(analyzer.token_error_messages(), vec!["token: \"(\" at 1:257"]);
}

#[test]
fn test_unexpected_eof() {
    let (analyzer, result) = analyze(UNTERMINATED);
    assert!(result.is_err());
    assert_eq!(analyzer.token_error_messages(), vec!["token: <<EOF>> at 1:10"]);
    let messages = analyzer.linter_token_error_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        format!("test.src:1:10: syntax error (unexpected EOF) ({HELP_BASE_URL}).")
    );
}

// ============================================================================
// COLLABORATOR REUSE
// ============================================================================

#[test]
fn test_lexer_reuse_after_error_does_not_leak_state() {
    let mut lexer = StandardLexer::default();
    let mut parser = StatementParser::new();

    let mut first = analyzer("#define A\n\x01");
    assert!(first.analyze(&mut lexer, &mut parser).is_err());

    let mut second = analyzer(SIMPLE_LET);
    assert!(second.analyze(&mut lexer, &mut parser).is_ok());
    assert_eq!(second.data().tokens()[0].kind, SyntaxKind::LET_KW);
    assert!(second.rejected_tokens().is_empty());
}

#[test]
fn test_parser_reuse_replaces_rejections() {
    let mut parser = StatementParser::new();

    let mut bad = analyzer(MISSING_NAME);
    assert!(bad.analyze(&mut StandardLexer::default(), &mut parser).is_err());

    let mut good = analyzer(SIMPLE_LET);
    assert!(good.analyze(&mut StandardLexer::default(), &mut parser).is_ok());
    assert!(good.rejected_tokens().is_empty());
}

// ============================================================================
// LOADING FROM DISK
// ============================================================================

#[test]
fn test_from_path_uses_path_as_filename() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("unit.src");
    std::fs::write(&path, "let = 1;\n").unwrap();

    let mut analyzer = FileAnalyzer::from_path(&path)
        .unwrap()
        .with_filter(StandardRules::is_significant);
    assert_eq!(analyzer.filename(), path.display().to_string());
    assert!(
        analyzer
            .analyze(&mut StandardLexer::default(), &mut StatementParser::new())
            .is_err()
    );
    let messages = analyzer.linter_token_error_messages();
    assert!(messages[0].starts_with(&format!("{}:1:5: syntax error", path.display())));
}

#[test]
fn test_from_path_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = FileAnalyzer::from_path(temp_dir.path().join("absent.src")).unwrap_err();
    assert!(matches!(err, AnalysisError::Io { .. }));
    assert!(!err.is_input_error());
}
