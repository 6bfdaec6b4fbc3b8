use indexmap::IndexMap;

use crate::lexer::tokens::{Token, TokenKind};

use super::SEPARATOR_LINE;

/// Reference numbers for identifier and literal values, starting at 1 and
/// assigned on first occurrence.
#[derive(Debug, Clone, Default)]
pub struct LexemeTable {
    ids: IndexMap<String, usize>,
}

impl LexemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_of(&mut self, value: &str) -> usize {
        if let Some(&id) = self.ids.get(value) {
            return id;
        }
        let id = self.ids.len() + 1;
        self.ids.insert(value.to_string(), id);
        id
    }

    pub fn get(&self, value: &str) -> Option<usize> {
        self.ids.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Values in the order their numbers were handed out.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.ids.iter().map(|(value, &id)| (value.as_str(), id))
    }
}

pub fn render_lexemes(out: &mut String, tokens: &[Token]) -> LexemeTable {
    let mut table = LexemeTable::new();

    out.push_str("Lexemes\n");
    out.push_str(&format!("{}\n", SEPARATOR_LINE));

    for (i, token) in tokens.iter().filter(|t| !t.is_eof()).enumerate() {
        if token.starts_line && i > 0 {
            out.push('\n');
        }

        match token.kind {
            TokenKind::Identifier | TokenKind::Literal(_) => {
                out.push_str(&format!("<ID{}> ", table.id_of(&token.value)));
            }
            _ => {
                out.push_str(&format!("{} ", token.value));
            }
        }
    }

    out.push('\n');
    out.push_str(&format!("{}\n", SEPARATOR_LINE));
    table
}
