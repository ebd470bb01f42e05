//! Lexical analysis for an indentation-structured language.
//!
//! This module turns source text into a flat stream of tokens. It handles:
//!
//! - Recognition of keywords, identifiers, numbers and operators using regex patterns
//! - Block structure through synthetic `Indent`/`Dedent`/`Newline` tokens
//! - Skipping of blank lines, whitespace and `#` comments
//! - Printing tokens as `KIND<TAB>text` lines

pub mod indentation;
pub mod lexer;
pub mod tokens;
