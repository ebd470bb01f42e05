//! Error types and error handling for the tokenizer.
//!
//! Every error is fatal: the scan stops at the first one and the error is
//! handed back to the caller together with the line it was found on.
//!
//! - `UnrecognizedToken` for characters no lexical pattern accepts
//! - `IndentationError` for a dedent to a width no enclosing block has

pub mod errors;
