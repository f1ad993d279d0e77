use std::{fmt::Display, slice::Iter};

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ParseError::IntegerParse { .. } => "IntegerParse",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ParseError::UnexpectedToken {
                expected: TokenKind::Assignment,
                ..
            } => ErrorTip::Suggestion(String::from("let bindings take the form `let <name> = <value>;`")),
            ParseError::UnexpectedToken {
                expected: TokenKind::CloseParen,
                ..
            } => ErrorTip::Suggestion(String::from("did you forget a closing `)`?")),
            ParseError::UnexpectedToken { .. } => ErrorTip::None,
            ParseError::NoPrefixParseFn {
                kind: TokenKind::EOF,
            } => ErrorTip::Suggestion(String::from("the input ended in the middle of an expression")),
            ParseError::NoPrefixParseFn { kind } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", kind))
            }
            ParseError::IntegerParse { literal } => ErrorTip::Suggestion(format!(
                "`{}` has digits its base does not allow or does not fit in 64 bits",
                literal
            )),
            ParseError::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "break the expression up with intermediate `let` bindings",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Errors recorded during a single parse, in the order they were found.
///
/// Recording never stops the parse; a non-empty collection means the
/// resulting tree is incomplete and should not be trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<ParseError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, ParseError> {
        self.errors.iter()
    }

    /// Renders every recorded error as a human-readable message.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseError;
    type IntoIter = Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
