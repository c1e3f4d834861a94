//! Standard rule set through the public Lexer interface.

use rstest::rstest;
use syntaxis::lexer::StandardMode;
use syntaxis::{Lexer, StandardLexer, StandardRules, SyntaxKind};

use crate::helpers::analysis_helpers::{kinds, lex};

#[rstest]
#[case("let", SyntaxKind::LET_KW)]
#[case("letter", SyntaxKind::IDENT)]
#[case("true", SyntaxKind::TRUE_KW)]
#[case("_x9", SyntaxKind::IDENT)]
#[case("42", SyntaxKind::INTEGER)]
#[case("\"a \\\" b\"", SyntaxKind::STRING)]
#[case("// note", SyntaxKind::LINE_COMMENT)]
#[case("/* a\n b */", SyntaxKind::BLOCK_COMMENT)]
#[case("<=", SyntaxKind::LT_EQ)]
#[case("&&", SyntaxKind::AMP_AMP)]
#[case("#include", SyntaxKind::DIRECTIVE)]
fn test_single_token(#[case] text: &str, #[case] kind: SyntaxKind) {
    let tokens = lex(text);
    assert_eq!(kinds(&tokens), vec![kind, SyntaxKind::EOF]);
    assert_eq!(tokens[0].text(text), text);
}

#[rstest]
#[case("\x01")]
#[case("$")]
#[case("\"unterminated")]
fn test_unmatched_input_is_error_token(#[case] text: &str) {
    let mut lexer = StandardLexer::new(text);
    let token = lexer.next_token();
    assert!(lexer.token_is_error(&token));
    assert!(!token.range.is_empty());
}

#[test]
fn test_non_ascii_error_token_covers_whole_character() {
    let text = "a → b";
    let tokens = lex(text);
    let error = tokens
        .iter()
        .find(|t| t.kind == SyntaxKind::ERROR)
        .expect("error token");
    assert_eq!(error.text(text), "→");
}

#[test]
fn test_directive_remainder_is_scanned_as_text() {
    let text = "#define MAX (1+2)\nx";
    assert_eq!(
        kinds(&lex(text)),
        vec![
            SyntaxKind::DIRECTIVE,
            SyntaxKind::WHITESPACE,
            SyntaxKind::DIRECTIVE_TEXT,
            SyntaxKind::WHITESPACE,
            SyntaxKind::DIRECTIVE_TEXT,
            SyntaxKind::WHITESPACE,
            SyntaxKind::IDENT,
            SyntaxKind::EOF,
        ]
    );
}

#[test]
fn test_directive_at_end_of_text() {
    let text = "#pragma once";
    let mut lexer = StandardLexer::new(text);
    assert_eq!(lexer.next_token().kind, SyntaxKind::DIRECTIVE);
    assert_eq!(lexer.mode(), StandardMode::Directive);
    assert_eq!(lexer.depth(), 2);
    while !lexer.next_token().is_eof() {}
    assert_eq!(lexer.depth(), 1);
    assert_eq!(lexer.mode(), StandardMode::Initial);
}

#[test]
fn test_restart_inside_directive_resets_mode() {
    let mut lexer = StandardLexer::new("#define A 1");
    lexer.next_token();
    assert_eq!(lexer.mode(), StandardMode::Directive);

    lexer.restart("A 1");
    assert_eq!(lexer.depth(), 1);
    assert_eq!(lexer.mode(), StandardMode::Initial);
    assert_eq!(lexer.next_token().kind, SyntaxKind::IDENT);
}

#[test]
fn test_last_token_tracks_most_recent() {
    let mut lexer = StandardLexer::new("a;");
    let first = lexer.next_token();
    assert_eq!(lexer.last_token(), first);
    let second = lexer.next_token();
    assert_eq!(lexer.last_token(), second);
    assert_eq!(second.kind, SyntaxKind::SEMICOLON);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = StandardLexer::new("a");
    lexer.next_token();
    let eof = lexer.next_token();
    assert!(eof.is_eof());
    assert_eq!(lexer.next_token(), eof);
}

#[rstest]
#[case(SyntaxKind::WHITESPACE, false)]
#[case(SyntaxKind::LINE_COMMENT, false)]
#[case(SyntaxKind::BLOCK_COMMENT, false)]
#[case(SyntaxKind::IDENT, true)]
#[case(SyntaxKind::DIRECTIVE_TEXT, true)]
#[case(SyntaxKind::ERROR, true)]
#[case(SyntaxKind::EOF, true)]
fn test_significance_policy(#[case] kind: SyntaxKind, #[case] significant: bool) {
    let token = syntaxis::Token::new(kind.into(), syntaxis::TextRange::default());
    assert_eq!(StandardRules::is_significant(&token), significant);
}

#[rstest]
#[case("#define A \"x", "let b = 2;")]
#[case("/* open", "x // y\nz")]
#[case("a\x01b", "#if X\nend")]
fn test_restart_matches_fresh_lexer(#[case] first: &str, #[case] second: &str) {
    let mut reused = StandardLexer::new(first);
    reused.next_token();
    reused.next_token();
    reused.restart(second);

    let mut tokens = Vec::new();
    loop {
        let token = reused.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }
    assert_eq!(tokens, lex(second));
}
