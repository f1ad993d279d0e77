//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Comments and whitespace
//! - Illegal characters and the EOF sentinel

use super::{
    lexer::{Lexer, TokenSource, TokenStream},
    tokens::{Token, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = Lexer::new("fn let true false if else return").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = Lexer::new("foo bar baz_123 _underscore letter").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar");
    assert_eq!(tokens[2].literal, "baz_123");
    assert_eq!(tokens[3].literal, "_underscore");
    // keyword prefixes stay identifiers
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].literal, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = Lexer::new("42 0 0x1F 0b101").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].literal, "0x1F");
    assert_eq!(tokens[3].literal, "0b101");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = Lexer::new("= + - ! * / < > == !=").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Dash);
    assert_eq!(tokens[3].kind, TokenKind::Not);
    assert_eq!(tokens[4].kind, TokenKind::Star);
    assert_eq!(tokens[5].kind, TokenKind::Slash);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::Equals);
    assert_eq!(tokens[9].kind, TokenKind::NotEquals);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = Lexer::new("( ) { } , ;").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = Lexer::new("x==!y;").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[2].kind, TokenKind::Not);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let tokens = Lexer::new("let x = 5; // trailing comment\nlet y = 10;").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[3].literal, "5");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[6].literal, "y");
    assert_eq!(tokens[8].literal, "10");
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = Lexer::new("let x = 42;").tokenize();

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0], Token::new(TokenKind::Let, "let"));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x"));
    assert_eq!(tokens[2], Token::new(TokenKind::Assignment, "="));
    assert_eq!(tokens[3], Token::new(TokenKind::Number, "42"));
    assert_eq!(tokens[4], Token::new(TokenKind::Semicolon, ";"));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = Lexer::new("let x = @;").tokenize();

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_multibyte_character() {
    let tokens = Lexer::new("a é b").tokenize();

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "é");
    assert_eq!(tokens[2].literal, "b");
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = Lexer::new("   \n\t ").tokenize();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_repeats_eof() {
    let mut stream = TokenStream::new(vec![Token::new(TokenKind::Number, "1")]);

    assert_eq!(stream.next_token().literal, "1");
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Assignment.to_string(), "Assignment");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
