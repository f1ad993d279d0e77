//! Unit tests for error handling.
//!
//! This module contains tests for error messages, names, tips and the
//! diagnostics collection.

use crate::errors::errors::{Diagnostics, ErrorTip, ParseError};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Assignment,
        found: TokenKind::Number,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be Assignment, got Number instead"
    );
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::EOF,
    };

    assert_eq!(error.to_string(), "no prefix parse function for EOF found");
    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_integer_parse_message() {
    let error = ParseError::IntegerParse {
        literal: "99999999999999999999".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
    assert_eq!(error.get_error_name(), "IntegerParse");
}

#[test]
fn test_error_tip_none() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Identifier,
        found: TokenKind::Number,
    };

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::Semicolon,
    };

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`Semicolon` cannot start an expression"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostics_keep_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.push(ParseError::NoPrefixParseFn {
        kind: TokenKind::Assignment,
    });
    diagnostics.push(ParseError::IntegerParse {
        literal: "0b2".to_string(),
    });

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics.messages(),
        vec![
            "no prefix parse function for Assignment found".to_string(),
            "could not parse \"0b2\" as integer".to_string(),
        ]
    );
    assert_eq!(
        diagnostics.iter().map(|e| e.get_error_name()).collect::<Vec<_>>(),
        vec!["NoPrefixParseFn", "IntegerParse"]
    );
}

#[test]
fn test_integer_parse_tip_covers_malformed_and_oversized() {
    for literal in ["08", "0x1G", "99999999999999999999"] {
        let error = ParseError::IntegerParse {
            literal: literal.to_string(),
        };

        assert_eq!(
            error.get_tip().to_string(),
            format!(
                "`{}` has digits its base does not allow or does not fit in 64 bits",
                literal
            )
        );
    }
}

#[test]
fn test_nesting_too_deep_message() {
    let error = ParseError::NestingTooDeep { limit: 256 };

    assert_eq!(error.to_string(), "expression nested deeper than 256 levels");
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
