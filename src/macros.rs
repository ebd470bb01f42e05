//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! Both expect `Token`, `Literal`, `Lexer` and `Error` to be in scope.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$literal` - The parsed literal payload (`Literal::None` for non-literals)
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Literal::Integer(BigInt::from(42)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for operators and punctuation.
///
/// The generated handler pushes a token of the given kind carrying the
/// matched text and moves the cursor past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| -> Result<(), Error> {
            let span = lexer.span_of(matched.len());
            lexer.push(MK_TOKEN!($kind, String::from(matched), Literal::None, span));
            lexer.advance_n(matched.len());
            Ok(())
        }
    };
}
