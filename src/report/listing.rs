use crate::lexer::tokens::Token;

use super::colors;

/// Writes every token in display form, opening a new numbered line whenever a
/// token starts a source line.
pub fn render_listing(out: &mut String, tokens: &[Token], use_colors: bool) {
    let mut line = 1;

    for token in tokens {
        if token.starts_line {
            out.push_str(&format!("\n{}\t", line));
            line += 1;
        }

        if token.is_error() && use_colors {
            out.push_str(&format!("{}{}{}", colors::ERROR, token, colors::RESET));
        } else {
            out.push_str(&token.to_string());
        }
    }

    out.push_str("\n\n");
}
