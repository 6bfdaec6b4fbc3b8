//! Text report over a token sequence.
//!
//! A report has three sections, always in this order:
//!
//! - the token listing, one numbered output line per source line
//! - per-kind frequency tables
//! - the lexeme table, where identifiers and literals are replaced by
//!   stable `<ID n>` references

pub mod lexemes;
pub mod listing;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::lexer::tokens::Token;

pub use lexemes::LexemeTable;
pub use stats::Statistics;

pub const SEPARATOR_LINE: &str = "============================================================";

pub(crate) mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Report {
    colors: bool,
}

impl Report {
    pub fn new(colors: bool) -> Self {
        Report { colors }
    }

    /// Renders all three sections. An empty token sequence renders as an
    /// empty string.
    pub fn render(&self, tokens: &[Token]) -> String {
        if tokens.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        listing::render_listing(&mut out, tokens, self.colors);
        Statistics::collect(tokens).render(&mut out);
        lexemes::render_lexemes(&mut out, tokens);
        out
    }
}
