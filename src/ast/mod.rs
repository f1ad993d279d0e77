//! Abstract Syntax Tree definitions.
//!
//! This module contains the node types produced by the parser:
//!
//! - `Program`, the root holding statements in source order
//! - `Statement` and `Expression`, closed enums over every node kind
//! - The `Node` trait shared by all of them
//!
//! Every node renders through `Display` in a fully parenthesised form,
//! which makes operator grouping visible.

pub mod ast;
pub mod expressions;
pub mod statements;
