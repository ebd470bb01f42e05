use std::rc::Rc;

use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;
use tracing::debug;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::indentation::{is_blank, measure, Indentation, IndentationTracker};
use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^#.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq) },
        RegexPattern { regex: Regex::new(r"^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Neq) },
        RegexPattern { regex: Regex::new(r"^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gte) },
        RegexPattern { regex: Regex::new(r"^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lte) },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^-?[0-9]+\.[0-9]+").unwrap(), handler: float_handler },
        RegexPattern { regex: Regex::new(r"^-?[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign) },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt) },
        RegexPattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt) },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus) },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Times) },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DividedBy) },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen) },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new(r"^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    indentation: IndentationTracker,
    line: usize,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            indentation: IndentationTracker::new(),
            line: 0,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.pos + 1, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes of the current line.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position::new(self.line, self.pos + len + 1, Rc::clone(&self.file)),
        }
    }

    fn start_line(&mut self, line: usize) {
        self.line = line;
        self.pos = 0;
    }

    fn push_structural(&mut self, kind: TokenKind) {
        let span = self.span_of(0);
        self.push(MK_TOKEN!(kind, String::new(), Literal::None, span));
    }

    /// Measures the leading whitespace of `text` and emits the layout tokens
    /// it implies. Leaves the cursor on the first non-blank character.
    fn indent_line(&mut self, text: &str) -> Result<(), Error> {
        let width = measure(text);
        self.advance_n(width);

        let change = self
            .indentation
            .resolve(width)
            .map_err(|error| Error::new(error, self.position()))?;

        match change {
            Indentation::Unchanged => {}
            Indentation::Indent => self.push_structural(TokenKind::Indent),
            Indentation::Dedent(closed) => {
                for _ in 0..closed {
                    self.push_structural(TokenKind::Dedent);
                }
            }
        }

        Ok(())
    }

    /// Classifies the rest of `text` from the cursor to the end of the line.
    fn scan_line(&mut self, text: &str) -> Result<(), Error> {
        while self.pos < text.len() {
            let remainder = &text[self.pos..];
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|matched| (pattern.handler, matched.as_str()))
            });

            match found {
                Some((handler, matched)) => handler(self, matched)?,
                None => {
                    let token = remainder.chars().next().unwrap_or_default();
                    return Err(Error::new(
                        ErrorImpl::UnrecognizedToken { token },
                        self.position(),
                    ));
                }
            }
        }

        Ok(())
    }

    fn close_blocks(&mut self) {
        for _ in 0..self.indentation.flush() {
            self.push_structural(TokenKind::Dedent);
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let span = lexer.span_of(matched.len());

    let token = match RESERVED_LOOKUP.get(matched) {
        Some(TokenKind::Boolean) => MK_TOKEN!(
            TokenKind::Boolean,
            String::from(matched),
            Literal::Boolean(matched == "True"),
            span
        ),
        Some(kind) => MK_TOKEN!(*kind, String::from(matched), Literal::None, span),
        None => MK_TOKEN!(TokenKind::Identifier, String::from(matched), Literal::None, span),
    };

    lexer.push(token);
    lexer.advance_n(matched.len());
    Ok(())
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let value = matched
        .parse::<BigInt>()
        .expect("integer pattern only matches an optional sign and decimal digits");

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Integer, String::from(matched), Literal::Integer(value), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn float_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let value = matched
        .parse::<f64>()
        .expect("float pattern only matches an optional sign, digits, `.` and digits");

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Float, String::from(matched), Literal::Float(value), span));
    lexer.advance_n(matched.len());
    Ok(())
}

/// Splits `source` into tokens, making block structure explicit with
/// `Indent`, `Dedent` and `Newline` tokens.
///
/// Blank lines and comment-only lines produce nothing. Every other line
/// yields its layout tokens, then its content, then one `Newline`. Open
/// blocks are closed with `Dedent`s at the end of input.
///
/// The first error aborts the scan.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(file);
    debug!(file = %lex.file, bytes = source.len(), "tokenizing");

    for (index, raw) in source.split('\n').enumerate() {
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        lex.start_line(index + 1);

        if is_blank(text) {
            continue;
        }

        lex.indent_line(text)?;
        lex.scan_line(text)?;
        lex.push_structural(TokenKind::Newline);
    }

    lex.pos = 0;
    lex.close_blocks();

    debug!(tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
