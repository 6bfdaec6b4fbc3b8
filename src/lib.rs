#![allow(clippy::module_inception)]

use std::ops::Range;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

/// Byte range of consumed source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the source text covered by this span, or `None` if it does not
    /// lie on character boundaries of `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }
}

/// Finds the line containing byte `position`.
///
/// Lines end at `\r`, `\n` or `\r\n`, the same terminators the lexer
/// recognises. Returns the 1-based line number, the line's text (including
/// its terminator), and the byte offset of `position` within that line. A
/// position equal to the source length points just past the last line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last: Option<(usize, &str, usize)> = None;

    for line in split_lines(content) {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        last = Some((line_number, line, start));
        start = end;
        line_number += 1;
    }

    match last {
        Some((number, line, line_start)) => Some((number, line.to_string(), position - line_start)),
        None => Some((1, String::new(), 0)),
    }
}

/// Splits `content` into lines, each keeping its terminator.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let end = match rest.find(['\r', '\n']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Renders a lexical error as a caret diagram pointing into the source.
///
/// ```text
/// Error: UnterminatedString (close the literal with `"` before the end of the line)
/// -> Main.java
///    |
/// 20 | String s = "abc;
///    | -----------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        tip => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().start)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text
        .get(..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(line_pos);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, LexError};
    use crate::Span;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("ab\ncd", 5).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "cd");
        assert_eq!(line_pos, 2);

        assert_eq!(super::get_line_at_position("", 0), Some((1, String::new(), 0)));
        assert_eq!(super::get_line_at_position("ab", 3), None);
    }

    #[test]
    fn test_get_line_with_carriage_return_terminators() {
        let content = "a\rb\r\"x";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 4).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "\"x");
        assert_eq!(line_pos, 0);

        let (line_number, line, line_pos) = super::get_line_at_position("a\r\nb", 3).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "b");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_format_error_points_at_offset() {
        let source = "int x;\n  String s = \"abc;\n";
        let error = Error::new(LexError::UnterminatedString, Span::new(20, 25));
        let rendered = super::format_error(&error, source, "Main.java");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: UnterminatedString (close the literal with `\"` before the end of the line)");
        assert_eq!(lines[1], "-> Main.java");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | String s = \"abc;");
        assert_eq!(lines[4], "  | -----------^");
    }

    #[test]
    fn test_span_slice() {
        let span = Span::new(4, 7);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.slice("int foo;"), Some("foo"));
        assert_eq!(Span::new(1, 2).slice("é"), None);
    }
}
