use lazy_static::lazy_static;
use num_bigint::BigInt;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("break", TokenKind::Break);
        map.insert("def", TokenKind::Def);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("not", TokenKind::Not);
        map.insert("or", TokenKind::Or);
        map.insert("return", TokenKind::Return);
        map.insert("while", TokenKind::While);
        map.insert("True", TokenKind::Boolean);
        map.insert("False", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Layout
    Indent,
    Dedent,
    Newline,

    // Reserved
    And,
    Break,
    Def,
    Elif,
    Else,
    For,
    If,
    Not,
    Or,
    Return,
    While,

    Boolean,
    Identifier,
    Float,
    Integer,

    Assign,    // =
    Plus,      // +
    Minus,     // -
    Times,     // *
    DividedBy, // /

    Eq,  // ==
    Neq, // !=
    Gt,  // >
    Gte, // >=
    Lt,  // <
    Lte, // <=

    LParen,
    RParen,
    Comma,
    Colon,
}

impl TokenKind {
    /// Upper-case name used when tokens are printed.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::And => "AND",
            TokenKind::Break => "BREAK",
            TokenKind::Def => "DEF",
            TokenKind::Elif => "ELIF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Not => "NOT",
            TokenKind::Or => "OR",
            TokenKind::Return => "RETURN",
            TokenKind::While => "WHILE",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Float => "FLOAT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::DividedBy => "DIVIDEDBY",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Gt => "GT",
            TokenKind::Gte => "GTE",
            TokenKind::Lt => "LT",
            TokenKind::Lte => "LTE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parsed payload of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Integer(BigInt),
    Float(f64),
    Boolean(bool),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::None => write!(f, ""),
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{}", format_float(*value)),
            Literal::Boolean(value) => write!(f, "{}", value),
        }
    }
}

/// Plain decimal notation, with `.0` on whole values ("2.0", "0.00001").
fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub literal: Literal,
    pub span: Span,
}

impl Token {
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Boolean, TokenKind::Float, TokenKind::Integer])
    }
}

/// `KIND<TAB>text` for lexemes, the bare kind name for layout tokens.
/// Literals print their parsed value rather than the source text.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_structural() {
            write!(f, "{}", self.kind)
        } else if self.is_literal() {
            write!(f, "{}\t{}", self.kind, self.literal)
        } else {
            write!(f, "{}\t{}", self.kind, self.value)
        }
    }
}

/// Renders a token stream one token per line.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}
