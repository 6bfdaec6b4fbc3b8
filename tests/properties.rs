//! Property tests over arbitrary input.

use javalex::lexer::{
    lexer::{tokenize, Lexer},
    tokens::{LiteralType, TokenKind},
};
use proptest::prelude::*;

/// Fragments chosen to hit literal edge cases, comments and longest-match
/// boundaries when glued together.
const FRAGMENTS: &[&str] = &[
    "a", "_", "$", "int", "true", "null", "0", "1", "9", "0x", "0b", "x", "p", "e", "E", "f", "L",
    ".", "...", "+", "-", ">", ">>>=", "<", "=", "/", "*", "//", "/*", "*/", "\"", "'", "\\", "u",
    " ", "\t", "\n", "\r", "\r\n", "#", "@", "€", "é", ";", "(", "}",
];

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..48).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_terminates_with_single_eof(source in source_strategy()) {
        let tokens = tokenize(&source);

        prop_assert!(tokens.len() <= source.chars().count() + 1);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_tokens_partition_source(source in source_strategy()) {
        let tokens = tokenize(&source);
        let mut cursor = 0;

        for token in &tokens {
            prop_assert!(token.span.start >= cursor);
            prop_assert!(token.span.end >= token.span.start);
            let gap = &source[cursor..token.span.start];
            prop_assert_eq!(tokenize(gap).len(), 1);
            cursor = token.span.end;
        }
        prop_assert_eq!(cursor, source.len());
    }

    #[test]
    fn test_non_eof_tokens_consume_input(source in source_strategy()) {
        for token in tokenize(&source).iter().filter(|t| !t.is_eof()) {
            prop_assert!(!token.span.is_empty());
        }
    }

    #[test]
    fn test_literal_values_are_source_text(source in source_strategy()) {
        for token in tokenize(&source) {
            if let TokenKind::Literal(_) | TokenKind::Identifier | TokenKind::Keyword
                | TokenKind::Operator | TokenKind::Separator = token.kind
            {
                prop_assert_eq!(&source[token.span.range()], token.value.as_str());
            }
        }
    }

    #[test]
    fn test_lexer_is_deterministic(source in source_strategy()) {
        let first: Vec<_> = Lexer::new(&source).collect();
        let second: Vec<_> = Lexer::new(&source).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_decimal_digit_runs_are_int(digits in "[1-9][0-9]{0,18}") {
        let tokens = tokenize(&digits);

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Literal(LiteralType::Int));
        prop_assert_eq!(&tokens[0].value, &digits);
    }

    #[test]
    fn test_plain_strings_are_single_literals(body in "[a-zA-Z0-9 ,.;]{0,40}") {
        let source = format!("\"{}\"", body);
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Literal(LiteralType::String));
    }
}
