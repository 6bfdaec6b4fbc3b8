//! Lexical analysis for Java-like source text.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of classified tokens. It handles:
//!
//! - Whitespace, line terminators and comments
//! - Keywords, identifiers and the literal keywords `true`, `false`, `null`
//! - Numeric, string and character literals, with an inferred literal type
//! - Longest-match operators and separators
//! - Error tokens for malformed literals and unknown characters

pub mod lexer;
pub mod literal_type;
mod literals;
pub mod lookups;
pub mod tokens;
