//! Error types and diagnostic collection for the parser.
//!
//! This module defines the errors recorded while parsing. It includes:
//!
//! - `ParseError`, one variant per kind of grammar violation
//! - `Diagnostics`, the append-only list a parse accumulates
//! - Error names and suggestions for front ends

pub mod errors;

#[cfg(test)]
mod tests;
