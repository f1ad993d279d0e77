use log::trace;

use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpression, Identifier, InfixExpression, IntegerLiteral,
            PrefixExpression,
        },
    },
    errors::errors::ParseError,
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{lookups::Precedence, parser::Parser};

/// Parses an expression whose operators all bind tighter than `precedence`.
///
/// Expects the current token to start the expression and leaves the parser
/// on its last token. Expressions nested past `MAX_NESTING_DEPTH` are
/// reported once and yield `None`.
pub fn parse_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    precedence: Precedence,
) -> Option<Expression> {
    let depth = parser.nesting_depth();
    let expr = parse_nested_expr(parser, precedence);
    parser.restore_nesting(depth);

    expr
}

fn parse_nested_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    precedence: Precedence,
) -> Option<Expression> {
    trace!(
        "parse_expr({:?}): current token = {}",
        precedence,
        parser.current_token()
    );

    if !parser.enter_nesting() {
        return None;
    }

    // First parse the prefix position
    let kind = parser.current_token_kind();
    let Some(prefix_fn) = parser.prefix_handler(kind) else {
        parser.record(ParseError::NoPrefixParseFn { kind });
        return None;
    };

    let mut left = prefix_fn(parser)?;

    // Climb while the next operator binds tighter than the caller's; equal
    // precedence stops here, which makes binary operators left-associative
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix_fn) = parser.infix_handler(parser.peek_token_kind()) else {
            return Some(left);
        };

        // Every application wraps `left` one level deeper
        if !parser.enter_nesting() {
            return None;
        }

        parser.advance();
        left = infix_fn(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expression> {
    let token = parser.current_token().clone();

    match parse_integer(&token.literal) {
        Some(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        None => {
            parser.record(ParseError::IntegerParse {
                literal: token.literal,
            });
            None
        }
    }
}

/// Reads an integer literal the way source code spells it: `0x`, `0o` and
/// `0b` prefixes select hex, octal and binary, a bare leading zero selects
/// octal, anything else is decimal. Out-of-range values are rejected.
pub fn parse_integer(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x" | "0X") => (&literal[2..], 16),
        Some("0o" | "0O") => (&literal[2..], 8),
        Some("0b" | "0B") => (&literal[2..], 2),
        _ if literal.len() > 1 && literal.starts_with('0') => (&literal[1..], 8),
        _ => (literal, 10),
    };

    // from_str_radix would also accept a sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_boolean_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expression> {
    Some(Expression::Boolean(BooleanLiteral {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expression> {
    let token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator: token.literal.clone(),
        token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_infix_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expression,
) -> Option<Expression> {
    let token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Some(Expression::Infix(InfixExpression {
        operator: token.literal.clone(),
        token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_call_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    function: Expression,
) -> Option<Expression> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expression::Call(CallExpression {
        token,
        function: Box::new(function),
        arguments,
    }))
}

fn parse_call_arguments<S: TokenSource>(parser: &mut Parser<S>) -> Option<Vec<Expression>> {
    let mut args = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, Precedence::Lowest)?);
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(args)
}
