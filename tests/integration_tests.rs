//! Integration tests for lexing whole L-code files.
//!
//! Each test reads a fixture from `tests/fixtures` and checks the token
//! sequence produced by `tokenize`.

use llexer::{
    lexer::{
        lexer::tokenize,
        tokens::{KeyWordKind, OperatorKind, Token, TokenKind},
    },
    Position, Span,
};
use num_bigint::BigInt;
use std::{fs::read_to_string, path::PathBuf};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    read_to_string(path).unwrap()
}

fn lex_fixture(name: &str) -> Vec<Token> {
    tokenize(fixture(name)).unwrap()
}

#[test]
fn test_multiline_comments() {
    let tokens = lex_fixture("multiline_test.l");

    assert_eq!(tokens.len(), 3);
    let texts: Vec<&str> = tokens
        .iter()
        .map(|token| match &token.kind {
            TokenKind::Comment(text) => text.as_str(),
            other => panic!("expected comment, got {:?}", other),
        })
        .collect();
    assert_eq!(texts, vec!["// // read;", "// lala", "// print pp"]);
}

#[test]
fn test_positioning() {
    let tokens = lex_fixture("positioning_test.l");

    assert_eq!(tokens.len(), 6);
    assert_eq!(
        tokens.iter().map(|token| token.line()).collect::<Vec<_>>(),
        vec![0, 0, 0, 1, 1, 4]
    );
    assert_eq!(
        tokens.iter().map(|token| token.start()).collect::<Vec<_>>(),
        vec![0, 5, 9, 1, 7, 0]
    );
    assert_eq!(
        tokens.iter().map(|token| token.end()).collect::<Vec<_>>(),
        vec![4, 6, 10, 6, 9, 1]
    );
}

#[test]
fn test_keywords() {
    let tokens = lex_fixture("keywords_test.l");

    assert_eq!(
        tokens.iter().map(|token| token.kind.clone()).collect::<Vec<_>>(),
        [
            KeyWordKind::If,
            KeyWordKind::Then,
            KeyWordKind::Else,
            KeyWordKind::While,
            KeyWordKind::Do,
            KeyWordKind::Read,
            KeyWordKind::Write,
            KeyWordKind::Begin,
            KeyWordKind::End,
        ]
        .into_iter()
        .map(TokenKind::KeyWord)
        .collect::<Vec<_>>()
    );
}

#[test]
fn test_operators() {
    let tokens = lex_fixture("operators_test.l");

    assert_eq!(tokens.len(), 16);
    assert_eq!(
        tokens.iter().map(|token| token.kind.clone()).collect::<Vec<_>>(),
        [
            OperatorKind::Plus,
            OperatorKind::Minus,
            OperatorKind::Multiply,
            OperatorKind::Divide,
            OperatorKind::Mod,
            OperatorKind::Equal,
            OperatorKind::NotEqual,
            OperatorKind::Greater,
            OperatorKind::GreaterOrEqual,
            OperatorKind::Lower,
            OperatorKind::LowerOrEqual,
            OperatorKind::And,
            OperatorKind::Or,
            OperatorKind::LeftBracket,
            OperatorKind::RightBracket,
            OperatorKind::Semicolon,
        ]
        .into_iter()
        .map(TokenKind::Operator)
        .collect::<Vec<_>>()
    );
}

#[test]
fn test_floats() {
    let tokens = lex_fixture("floats_test.l");

    let values: Vec<f64> = tokens
        .iter()
        .map(|token| match token.kind {
            TokenKind::Float(value) => value,
            ref other => panic!("expected float, got {:?}", other),
        })
        .collect();

    assert_eq!(
        values,
        vec![1233.0, 0.213, 0.0, 23E12, 2.22, 0.23E-123, 0.23e-123]
    );
}

#[test]
fn test_integers() {
    let tokens = lex_fixture("integer_test.l");

    assert_eq!(tokens.len(), 5);
    assert!(tokens[0].is_operator(OperatorKind::Minus));
    assert_eq!(
        tokens[1..]
            .iter()
            .map(|token| token.kind.clone())
            .collect::<Vec<_>>(),
        [242345, 435, 234, 0]
            .into_iter()
            .map(|value| TokenKind::Integer(BigInt::from(value)))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_booleans() {
    let tokens = lex_fixture("boolean_test.l");

    assert_eq!(
        tokens.iter().map(|token| token.kind.clone()).collect::<Vec<_>>(),
        vec![TokenKind::Boolean(true), TokenKind::Boolean(false)]
    );
}

#[test]
fn test_identifiers() {
    let tokens = lex_fixture("identifier_test.l");

    assert_eq!(
        tokens.iter().map(|token| token.kind.clone()).collect::<Vec<_>>(),
        ["_ad", "sdf", "f", "rgf", "_df11", "_11", "reredcc_"]
            .into_iter()
            .map(|name| TokenKind::Identifier(name.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_wrong_float() {
    let error = tokenize(fixture("wrong_float_test.l")).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(error.get_position(), &Position(1, 5));
}

#[test]
fn test_example_program() {
    let tokens = lex_fixture("example.l");

    assert_eq!(tokens.len(), 37);
    assert!(tokens[0].is_comment());

    assert_eq!(tokens[6].kind, TokenKind::Float(0.0));
    assert_eq!(tokens[6].span, Span::new(2, 5, 9));

    assert!(tokens[8].is_keyword(KeyWordKind::While));
    assert!(tokens[10].is_operator(OperatorKind::Greater));
    assert_eq!(tokens[10].span, Span::new(3, 8, 9));

    assert_eq!(tokens[30].kind, TokenKind::Integer(BigInt::from(10)));
    assert_eq!(tokens[30].span, Span::new(7, 8, 10));
    assert_eq!(tokens[33].kind, TokenKind::Boolean(true));
    assert_eq!(tokens[33].start(), 22);
    assert_eq!(tokens[36].kind, TokenKind::Boolean(false));
    assert_eq!(tokens[36].line(), 7);
}

#[test]
fn test_every_span_slices_its_line() {
    let source = fixture("example.l");
    let lines: Vec<&str> = source.split('\n').collect();

    for token in lex_fixture("example.l") {
        assert!(token.start() <= token.end());
        let lexeme: String = lines[token.line()]
            .chars()
            .skip(token.start())
            .take(token.end() - token.start())
            .collect();
        match &token.kind {
            TokenKind::Identifier(name) => assert_eq!(&lexeme, name),
            TokenKind::Comment(text) => assert_eq!(&lexeme, text),
            TokenKind::Operator(kind) => assert_eq!(lexeme, kind.notation()),
            TokenKind::KeyWord(kind) => assert_eq!(lexeme.to_uppercase(), kind.name()),
            TokenKind::Integer(value) => assert_eq!(lexeme, value.to_string()),
            TokenKind::Boolean(value) => assert_eq!(lexeme, value.to_string()),
            TokenKind::Float(value) => assert_eq!(lexeme.parse::<f64>().unwrap(), *value),
        }
    }
}
