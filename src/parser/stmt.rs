use log::trace;

use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

/// Parses one statement starting at the current token.
///
/// On success the current token is the last token of the statement.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Statement> {
    trace!("parse_stmt: current token = {}", parser.current_token());

    if let Some(stmt_fn) = parser.stmt_handler(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser).map(Statement::Expression)
}

pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Return(ReturnStatement { token, value }))
}

/// The terminator is optional so a trailing expression needs no `;`.
pub fn parse_expression_stmt<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Option<ExpressionStatement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(ExpressionStatement { token, expression })
}
