//! Readers for numeric, string and character literals.
//!
//! Each reader starts on the literal's first character and leaves the cursor
//! just past whatever it consumed, including on failure.

use crate::errors::errors::LexError;

use super::lexer::{is_identifier_part, Lexer};

impl<'a> Lexer<'a> {
    /// Reads a numeric literal and returns its raw text.
    ///
    /// # Number Formats
    ///
    /// - Hexadecimal: `0xFF`, `0xCAFE_BABEL`, `0x1.8p3`, `0x1p-2f`
    /// - Binary: `0b1010`, `0b1111_0000L`
    /// - Decimal: `42`, `1_000`, `3.14`, `1e10`, `2.5e-3f`, `10L`
    ///
    /// An exponent marker without digits is given back, so `1e` reads as `1`.
    pub(super) fn read_number_literal(&mut self) -> &'a str {
        let start = self.cursor();

        if self.peek(0) == Some('0') && matches!(self.peek(1), Some('x' | 'X')) {
            self.advance();
            self.advance();
            self.consume_digits(is_hex_digit);

            if self.peek(0) == Some('.')
                && self.peek(1).is_some_and(|c| is_hex_digit(c) || c == '_')
            {
                self.advance();
                self.consume_digits(is_hex_digit);
            }

            if self.eat_any(&['p', 'P']) {
                self.eat_any(&['+', '-']);
                self.consume_digits(is_decimal_digit);
                self.eat_any(&['f', 'F', 'd', 'D']);
            } else {
                self.eat_any(&['l', 'L']);
            }
            return self.slice_from(start);
        }

        if self.peek(0) == Some('0') && matches!(self.peek(1), Some('b' | 'B')) {
            self.advance();
            self.advance();
            self.consume_digits(is_binary_digit);
            self.eat_any(&['l', 'L']);
            return self.slice_from(start);
        }

        self.consume_digits(is_decimal_digit);

        if self.peek(0) == Some('.') && self.peek(1).is_some_and(is_decimal_digit) {
            self.advance();
            self.consume_digits(is_decimal_digit);
        }

        if matches!(self.peek(0), Some('e' | 'E')) {
            let save = self.cursor();
            self.advance();
            self.eat_any(&['+', '-']);
            if !self.consume_digits(is_decimal_digit) {
                self.set_cursor(save);
            }
        }

        self.eat_any(&['f', 'F', 'd', 'D', 'l', 'L']);
        self.slice_from(start)
    }

    /// Consumes a digit run in which every `_` must be directly followed by
    /// another digit. Returns whether at least one digit was consumed.
    fn consume_digits(&mut self, is_digit: fn(char) -> bool) -> bool {
        let mut saw_digit = false;

        while let Some(c) = self.peek(0) {
            if is_digit(c) {
                saw_digit = true;
                self.advance();
            } else if c == '_' && self.peek(1).is_some_and(is_digit) {
                self.advance();
            } else {
                break;
            }
        }

        saw_digit
    }

    /// Reads a string literal including both quotes.
    ///
    /// Fails on an unescaped line terminator, which is left unconsumed, or at
    /// the end of input.
    pub(super) fn read_string_literal(&mut self) -> Result<&'a str, LexError> {
        let start = self.cursor();
        self.advance();

        while let Some(c) = self.peek(0) {
            match c {
                '\r' | '\n' => return Err(LexError::UnterminatedString),
                '"' => {
                    self.advance();
                    return Ok(self.slice_from(start));
                }
                '\\' => {
                    self.advance();
                    self.consume_escape_body();
                }
                _ => {
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString)
    }

    /// Reads a character literal: exactly one plain character or escape
    /// sequence between single quotes.
    pub(super) fn read_char_literal(&mut self) -> Result<&'a str, LexError> {
        let start = self.cursor();
        self.advance();

        match self.peek(0) {
            None | Some('\r' | '\n') => return Err(LexError::UnterminatedChar),
            Some('\'') => {
                self.advance();
                return Err(LexError::UnterminatedChar);
            }
            Some('\\') => {
                self.advance();
                if matches!(self.peek(0), Some('\r' | '\n')) || !self.consume_escape_body() {
                    return Err(LexError::UnterminatedChar);
                }
            }
            Some(_) => {
                self.advance();
            }
        }

        if self.eat_any(&['\'']) {
            return Ok(self.slice_from(start));
        }

        self.skip_unclosed_word();
        Err(LexError::UnterminatedChar)
    }

    /// Consumes what follows a backslash. A `\u` escape takes any number of
    /// `u` markers and then four characters, which are not checked to be hex
    /// digits. Returns false if the input ran out first.
    fn consume_escape_body(&mut self) -> bool {
        match self.peek(0) {
            None => false,
            Some('u') => {
                while self.peek(0) == Some('u') {
                    self.advance();
                }
                (0..4).all(|_| self.advance().is_some())
            }
            Some(_) => {
                self.advance();
                true
            }
        }
    }

    // Recovery for malformed char literals: a run of word characters closed by
    // a quote (`'ab'`) becomes part of the error, anything else is left for
    // the next token.
    fn skip_unclosed_word(&mut self) {
        let rest = self.remainder();
        let word_len = rest
            .find(|c: char| !is_identifier_part(c))
            .unwrap_or(rest.len());

        if rest[word_len..].starts_with('\'') {
            self.set_cursor(self.cursor() + word_len + 1);
        }
    }
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}
