//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$start` / `$end` - Byte offsets of the consumed source text
/// * `$starts_line` - Whether the token is the first on its line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Operator, String::from("+"), 4, 5, false);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr, $starts_line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: Span {
                start: $start,
                end: $end,
            },
            starts_line: $starts_line,
        }
    };
}
