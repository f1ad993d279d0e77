#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use lexer::{
    lexer::{Lexer, TokenSource, TokenStream},
    tokens::{Token, TokenKind},
};
pub use parser::parser::{parse, Parser};
