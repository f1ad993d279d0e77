//! Lexical analysis module.
//!
//! This module contains the token source consumed by the parser. It handles:
//!
//! - The `TokenSource` pull interface the parser is written against
//! - A regex-driven `Lexer` over source text
//! - A `TokenStream` replaying a pre-built token list
//! - Recognition of keywords, identifiers, integer literals and operators

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
