//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way a parser or the command-line
//! front end would: source text in, rendered tokens or a diagnostic out.

use indentlex::{
    format_error,
    lexer::{
        lexer::tokenize,
        tokens::{render, TokenKind},
    },
};

const PROGRAM: &str = "\
# compute a factorial
def fact(n):
    if n <= 1:
        return 1
    else:
        return n * fact(n -1)

x = fact(5)   # trailing comment
while x > 0:
    x = x / 2.0
";

#[test]
fn test_tokenize_program() {
    let tokens = tokenize(PROGRAM, Some("fact.py".to_string())).unwrap();

    let expected = "\
DEF\tdef
IDENTIFIER\tfact
LPAREN\t(
IDENTIFIER\tn
RPAREN\t)
COLON\t:
NEWLINE
INDENT
IF\tif
IDENTIFIER\tn
LTE\t<=
INTEGER\t1
COLON\t:
NEWLINE
INDENT
RETURN\treturn
INTEGER\t1
NEWLINE
DEDENT
ELSE\telse
COLON\t:
NEWLINE
INDENT
RETURN\treturn
IDENTIFIER\tn
TIMES\t*
IDENTIFIER\tfact
LPAREN\t(
IDENTIFIER\tn
INTEGER\t-1
RPAREN\t)
NEWLINE
DEDENT
DEDENT
IDENTIFIER\tx
ASSIGN\t=
IDENTIFIER\tfact
LPAREN\t(
INTEGER\t5
RPAREN\t)
NEWLINE
WHILE\twhile
IDENTIFIER\tx
GT\t>
INTEGER\t0
COLON\t:
NEWLINE
INDENT
IDENTIFIER\tx
ASSIGN\t=
IDENTIFIER\tx
DIVIDEDBY\t/
FLOAT\t2.0
NEWLINE
DEDENT
";

    assert_eq!(render(&tokens), expected);
}

#[test]
fn test_tokenize_is_repeatable() {
    let first = tokenize(PROGRAM, None).unwrap();
    let second = tokenize(PROGRAM, None).unwrap();

    assert_eq!(first, second);
    assert_eq!(render(&first), render(&second));
}

#[test]
fn test_layout_tokens_balance() {
    let tokens = tokenize(PROGRAM, None).unwrap();

    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    assert_eq!(indents, 4);
    assert_eq!(indents, dedents);
}

#[test]
fn test_indentation_error_diagnostic() {
    let source = "if x:\n    y = 1\n  z = 2\n";
    let error = tokenize(source, Some("bad.py".to_string())).unwrap_err();

    assert_eq!(error.get_line(), 3);
    assert_eq!(
        format_error(&error, source),
        "Error: IndentationError (Indentation of width 2 does not match any outer block)\n\
         -> bad.py\n  |\n3 | z = 2\n  | ^\n"
    );
}

#[test]
fn test_unrecognized_token_diagnostic() {
    let source = "x = 1\ny = 2 @ 3\n";
    let error = tokenize(source, Some("bad.py".to_string())).unwrap_err();

    assert_eq!(
        format_error(&error, source),
        "Error: UnrecognizedToken (Unexpected character `@`)\n\
         -> bad.py\n  |\n2 | y = 2 @ 3\n  | ------^\n"
    );
}
