use tracing::{debug, trace};

use crate::{errors::errors::LexError, Span, MK_TOKEN};

use super::{
    literal_type::infer_literal_type,
    lookups::{Registry, JAVA_REGISTRY},
    tokens::{Token, TokenKind},
};

/// Hand-written scanner producing one token per call.
///
/// The lexer owns nothing but a cursor into the borrowed source. Tokens it
/// returns are independent values and may outlive it.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    registry: &'a Registry,
    pos: usize,
    produced_any: bool,
    eof: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::with_registry(source, &JAVA_REGISTRY)
    }

    pub fn with_registry(source: &'a str, registry: &'a Registry) -> Lexer<'a> {
        Lexer {
            source,
            registry,
            pos: 0,
            produced_any: false,
            eof: None,
        }
    }

    /// Scans the next token and moves the cursor past it.
    ///
    /// Once the end of input is reached every further call returns the same
    /// EOF token.
    pub fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        let saw_newline = self.skip_trivia();
        let starts_line = saw_newline || !self.produced_any;
        self.produced_any = true;

        let start = self.pos;
        let Some(c) = self.peek(0) else {
            let token = MK_TOKEN!(TokenKind::EOF, String::new(), start, start, starts_line);
            trace!(offset = start, "end of input");
            self.eof = Some(token.clone());
            return token;
        };

        let (kind, value) = if is_identifier_start(c) {
            self.lex_word()
        } else if c.is_ascii_digit() {
            let text = self.read_number_literal();
            (TokenKind::Literal(infer_literal_type(text)), text.to_string())
        } else if c == '"' {
            literal_or_error(self.read_string_literal())
        } else if c == '\'' {
            literal_or_error(self.read_char_literal())
        } else if let Some((kind, lexeme)) = self.match_symbol() {
            self.pos += lexeme.len();
            (kind, lexeme.to_string())
        } else {
            self.advance();
            (TokenKind::Error(LexError::UnrecognisedCharacter), c.to_string())
        };

        let token = MK_TOKEN!(kind, value, start, self.pos, starts_line);
        trace!(kind = %token.kind, value = %token.value, start, end = self.pos, "token");
        token
    }

    pub(super) fn peek(&self, lookahead: usize) -> Option<char> {
        self.remainder().chars().nth(lookahead)
    }

    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it is one of `options`.
    pub(super) fn eat_any(&mut self, options: &[char]) -> bool {
        match self.peek(0) {
            Some(c) if options.contains(&c) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    pub(super) fn cursor(&self) -> usize {
        self.pos
    }

    pub(super) fn set_cursor(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub(super) fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub(super) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes `\r`, `\n` or `\r\n` as a single terminator.
    fn consume_line_terminator(&mut self) {
        if self.advance() == Some('\r') && self.peek(0) == Some('\n') {
            self.advance();
        }
    }

    /// Skips whitespace and comments, reporting whether a line terminator
    /// was among them.
    fn skip_trivia(&mut self) -> bool {
        let mut saw_newline = false;

        while let Some(c) = self.peek(0) {
            match c {
                ' ' | '\t' | '\u{000C}' | '\u{000B}' => {
                    self.advance();
                }
                '\r' | '\n' => {
                    self.consume_line_terminator();
                    saw_newline = true;
                }
                '/' if self.peek(1) == Some('/') => {
                    while !matches!(self.peek(0), None | Some('\r' | '\n')) {
                        self.advance();
                    }
                }
                '/' if self.peek(1) == Some('*') => {
                    self.pos += 2;
                    saw_newline |= self.skip_block_comment_body();
                }
                _ => break,
            }
        }

        saw_newline
    }

    // An unclosed block comment runs to the end of input.
    fn skip_block_comment_body(&mut self) -> bool {
        let mut saw_newline = false;

        while let Some(c) = self.peek(0) {
            match c {
                '*' if self.peek(1) == Some('/') => {
                    self.pos += 2;
                    break;
                }
                '\r' | '\n' => {
                    self.consume_line_terminator();
                    saw_newline = true;
                }
                _ => {
                    self.advance();
                }
            }
        }

        saw_newline
    }

    fn lex_word(&mut self) -> (TokenKind, String) {
        let start = self.pos;
        while self.peek(0).is_some_and(is_identifier_part) {
            self.advance();
        }

        let word = self.slice_from(start);
        let kind = if self.registry.is_keyword(word) {
            TokenKind::Keyword
        } else if self.registry.is_literal_keyword(word) {
            TokenKind::Literal(infer_literal_type(word))
        } else {
            TokenKind::Identifier
        };

        (kind, word.to_string())
    }

    /// Longest operator or separator at the cursor. Operators win ties, so a
    /// separator is only chosen when it is strictly longer (`...` over `.`).
    fn match_symbol(&self) -> Option<(TokenKind, &'a str)> {
        let registry = self.registry;
        let operator = self.longest_match(registry.max_operator_len(), |s| registry.is_operator(s));
        let separator =
            self.longest_match(registry.max_separator_len(), |s| registry.is_separator(s));

        match (operator, separator) {
            (Some(op), Some(sep)) if sep.len() > op.len() => Some((TokenKind::Separator, sep)),
            (Some(op), _) => Some((TokenKind::Operator, op)),
            (None, Some(sep)) => Some((TokenKind::Separator, sep)),
            (None, None) => None,
        }
    }

    /// Tries every candidate length from `max_len` down to one and returns
    /// the first registered lexeme.
    fn longest_match(&self, max_len: usize, is_member: impl Fn(&str) -> bool) -> Option<&'a str> {
        let rest = self.remainder();

        (1..=max_len.min(rest.len()))
            .rev()
            .filter_map(|len| rest.get(..len))
            .find(|candidate| is_member(candidate))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the EOF token, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.eof.is_some() {
            return None;
        }
        Some(self.next_token())
    }
}

fn literal_or_error(scanned: Result<&str, LexError>) -> (TokenKind, String) {
    match scanned {
        Ok(text) => (TokenKind::Literal(infer_literal_type(text)), text.to_string()),
        Err(reason) => (TokenKind::Error(reason), reason.to_string()),
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

pub(super) fn is_identifier_part(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

/// Scans the whole source. The result always ends with exactly one EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();

    let errors = tokens.iter().filter(|t| t.is_error()).count();
    let literals = tokens.iter().filter(|t| t.literal_type().is_some()).count();
    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        literals,
        errors,
        "tokenized source"
    );

    tokens
}
