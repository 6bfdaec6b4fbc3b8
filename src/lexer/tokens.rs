use std::fmt::Display;

use crate::{
    errors::errors::{Error, LexError},
    Span,
};

/// Semantic type inferred from a literal's surface form.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LiteralType {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
    Unknown,
}

impl Display for LiteralType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LiteralType::Null => "null",
            LiteralType::Boolean => "boolean",
            LiteralType::Int => "int",
            LiteralType::Long => "long",
            LiteralType::Float => "float",
            LiteralType::Double => "double",
            LiteralType::Char => "char",
            LiteralType::String => "String",
            LiteralType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error(LexError),
    Identifier,
    Keyword,
    Literal(LiteralType),
    Operator,
    Separator,
}

impl TokenKind {
    /// Position of the kind in reports: EOF first, separators last.
    pub fn rank(&self) -> u8 {
        match self {
            TokenKind::EOF => 0,
            TokenKind::Error(_) => 1,
            TokenKind::Identifier => 2,
            TokenKind::Keyword => 3,
            TokenKind::Literal(_) => 4,
            TokenKind::Operator => 5,
            TokenKind::Separator => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Error(_) => "ERROR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Literal(_) => "LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub starts_line: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::Error(_) => write!(f, "ERR({})", self.value),
            TokenKind::Identifier => write!(f, "ID({})", self.value),
            TokenKind::Keyword => write!(f, "KEY({})", self.value),
            TokenKind::Literal(literal_type) => write!(f, "LIT({}, {})", self.value, literal_type),
            TokenKind::Operator => write!(f, "OP({})", self.value),
            TokenKind::Separator => write!(f, "SEP({})", self.value),
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    pub fn literal_type(&self) -> Option<LiteralType> {
        match self.kind {
            TokenKind::Literal(literal_type) => Some(literal_type),
            _ => None,
        }
    }

    /// The diagnostic for an error token.
    pub fn as_error(&self) -> Option<Error> {
        match self.kind {
            TokenKind::Error(reason) => Some(Error::new(reason, self.span)),
            _ => None,
        }
    }
}
