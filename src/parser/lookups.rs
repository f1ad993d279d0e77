use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler<S> = fn(&mut Parser<S>) -> Option<Statement>;
pub type PrefixHandler<S> = fn(&mut Parser<S>) -> Option<Expression>;
pub type InfixHandler<S> = fn(&mut Parser<S>, Expression) -> Option<Expression>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Equality and comparison
    parser.register_infix(TokenKind::Equals, Precedence::Equals, parse_infix_expr);
    parser.register_infix(TokenKind::NotEquals, Precedence::Equals, parse_infix_expr);
    parser.register_infix(TokenKind::Less, Precedence::LessGreater, parse_infix_expr);
    parser.register_infix(TokenKind::Greater, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.register_infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.register_infix(TokenKind::Dash, Precedence::Sum, parse_infix_expr);
    parser.register_infix(TokenKind::Star, Precedence::Product, parse_infix_expr);
    parser.register_infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    parser.register_infix(TokenKind::OpenParen, Precedence::Call, parse_call_expr);

    // Literals and symbols
    parser.register_prefix(TokenKind::Identifier, parse_identifier_expr);
    parser.register_prefix(TokenKind::Number, parse_integer_expr);
    parser.register_prefix(TokenKind::True, parse_boolean_expr);
    parser.register_prefix(TokenKind::False, parse_boolean_expr);
    parser.register_prefix(TokenKind::Not, parse_prefix_expr);
    parser.register_prefix(TokenKind::Dash, parse_prefix_expr);
    parser.register_prefix(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.register_stmt(TokenKind::Let, parse_let_stmt);
    parser.register_stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, keyed by the token being dispatched on
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;
pub type PrefixLookup<S> = HashMap<TokenKind, PrefixHandler<S>>;
pub type InfixLookup<S> = HashMap<TokenKind, InfixHandler<S>>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
