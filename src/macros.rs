//! Token-building macros for the lexer's pattern table.
//!
//! `MK_DEFAULT_HANDLER!` covers every operator and delimiter whose text is
//! fixed, so the table only spells out handlers for identifiers, numbers
//! and skipped input.

/// Builds a `Token` from a kind and anything convertible into its literal.
///
/// ```ignore
/// let eq = MK_TOKEN!(TokenKind::Equals, "==");
/// let ident = MK_TOKEN!(TokenKind::Identifier, matched);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        Token {
            kind: $kind,
            literal: String::from($literal),
        }
    };
}

/// Expands to a `RegexHandler` closure for a token whose text never varies.
///
/// The closure moves the cursor past `$value` and yields a `$kind` token
/// carrying `$value` as its literal; the matched text is ignored.
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^!=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            lexer.advance_n($value.len());
            Some(MK_TOKEN!($kind, $value))
        }
    };
}
