//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from a `TokenSource` through a two-token window
//! (current and peek) and uses a Pratt parser with prefix/infix handlers
//! for expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers (tokens that can start an expression)
//! - Infix handlers (tokens that combine two expressions)
//! - Precedences for operator climbing
//!
//! Grammar violations never abort the parse. They are recorded as
//! diagnostics and the offending construct is left out of the tree.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostics, ParseError},
    lexer::{
        lexer::TokenSource,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How deep an expression tree may grow before the parser gives up on it.
///
/// Each prefix operator, grouping, call argument and chained infix operator
/// adds a level. Past the limit a diagnostic is recorded and the expression
/// is dropped, which keeps both parsing and dropping the tree within a
/// small, fixed amount of stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token source and a window of two tokens, the
/// diagnostics recorded so far, and the lookup tables used to dispatch
/// statements and expressions.
pub struct Parser<S> {
    /// The token producer being parsed
    source: S,
    /// The token under examination
    current_token: Token,
    /// The token after `current_token`
    peek_token: Token,
    /// Errors recorded so far, in order
    diagnostics: Diagnostics,
    /// Levels of expression nesting entered so far
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup<S>,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup<S>,
    /// Lookup table for infix precedences
    precedence_lookup: PrecedenceLookup,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser instance with the default grammar registered.
    ///
    /// Exactly two tokens are pulled from `source` so that both the current
    /// and the peek token are populated before any parsing call.
    ///
    /// # Arguments
    ///
    /// * `source` - The token producer to parse
    pub fn new(source: S) -> Self {
        let mut parser = Parser {
            source,
            current_token: Token::eof(),
            peek_token: Token::eof(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    pub fn advance(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.source.next_token());
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the token after the current one without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The TokenKind the peek token must have
    ///
    /// # Returns
    ///
    /// Returns true after advancing if the peek token matches. Otherwise an
    /// unexpected-token diagnostic is recorded, nothing is consumed, and
    /// false is returned.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_token_is(expected_kind) {
            self.advance();
            true
        } else {
            self.record(ParseError::UnexpectedToken {
                expected: expected_kind,
                found: self.peek_token_kind(),
            });
            false
        }
    }

    /// Returns the precedence of the peek token, `Lowest` if it has none.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token_kind())
    }

    /// Returns the precedence of the current token, `Lowest` if it has none.
    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token_kind())
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Returns the statement handler registered for a token kind.
    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler<S>> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Returns the prefix handler registered for a token kind.
    pub fn prefix_handler(&self, kind: TokenKind) -> Option<PrefixHandler<S>> {
        self.prefix_lookup.get(&kind).copied()
    }

    /// Returns the infix handler registered for a token kind.
    pub fn infix_handler(&self, kind: TokenKind) -> Option<InfixHandler<S>> {
        self.infix_lookup.get(&kind).copied()
    }

    /// Registers a statement handler for a leading token.
    ///
    /// Tokens without a statement handler start an expression statement.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn register_stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a prefix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `prefix_fn` - The handler called when the token starts an expression
    pub fn register_prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler<S>) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - How tightly this operator binds
    /// * `infix_fn` - The handler called with the already parsed left operand
    pub fn register_infix(
        &mut self,
        kind: TokenKind,
        precedence: Precedence,
        infix_fn: InfixHandler<S>,
    ) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Appends an error to the diagnostics without interrupting the parse.
    pub fn record(&mut self, error: ParseError) {
        debug!("parse error: {}", error);
        self.diagnostics.push(error);
    }

    /// Returns every diagnostic recorded so far as a message.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    /// Returns the structured diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Steps one level deeper into an expression.
    ///
    /// Returns false, with a diagnostic recorded, instead of passing
    /// `MAX_NESTING_DEPTH`.
    pub(crate) fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.record(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            return false;
        }

        self.depth += 1;
        true
    }

    pub(crate) fn nesting_depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn restore_nesting(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Discards the rest of a failed statement, stopping on `;` or `EOF`.
    fn skip_to_terminator(&mut self) {
        debug!("skipping from {} to the end of the statement", self.current_token());
        while !self.current_token_is(TokenKind::Semicolon) && !self.current_token_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Parses statements until the end of input.
    ///
    /// A Program is always returned. A statement that fails to parse is
    /// left out, the rest of it up to the next `;` is skipped, and `errors()`
    /// describes why; callers must check the diagnostics before trusting
    /// the tree.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Some(stmt) => program.statements.push(stmt),
                None => self.skip_to_terminator(),
            }
            // Unconditional so a failed statement cannot stall the loop
            self.advance();
        }

        program
    }
}

/// Parses a token stream into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance
/// with the default grammar and parses every statement until EOF.
///
/// # Arguments
///
/// * `source` - The token producer to parse
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the diagnostics)
/// - The parsed Program
pub fn parse<S: TokenSource>(source: S) -> (Parser<S>, Program) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (parser, program)
}
