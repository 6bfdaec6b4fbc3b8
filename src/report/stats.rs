use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::lexer::tokens::{Token, TokenKind};

use super::SEPARATOR_LINE;

/// Occurrence counts for one token kind, keyed in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindStatistics {
    pub label: &'static str,
    pub counts: IndexMap<String, usize>,
}

impl KindStatistics {
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statistics {
    pub groups: Vec<KindStatistics>,
}

impl Statistics {
    /// Groups tokens by kind in report order (EOF first, separators last).
    pub fn collect(tokens: &[Token]) -> Self {
        let mut by_rank: BTreeMap<u8, KindStatistics> = BTreeMap::new();

        for token in tokens {
            let group = by_rank
                .entry(token.kind.rank())
                .or_insert_with(|| KindStatistics {
                    label: token.kind.label(),
                    counts: IndexMap::new(),
                });
            *group.counts.entry(grouping_key(token)).or_insert(0) += 1;
        }

        Statistics {
            groups: by_rank.into_values().collect(),
        }
    }

    pub fn group(&self, label: &str) -> Option<&KindStatistics> {
        self.groups.iter().find(|group| group.label == label)
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("\nStats\n\n\n");

        for group in &self.groups {
            out.push_str(&format!("{}\n", group.label));
            out.push_str(&format!("{}\n", SEPARATOR_LINE));
            out.push_str("i\tcnt\tval\n");
            out.push_str(&format!("{}\n", SEPARATOR_LINE));

            for (i, (key, count)) in group.counts.iter().enumerate() {
                out.push_str(&format!("{}\t{}\t{}\n", i + 1, count, key));
            }

            out.push_str(&format!("{}\n", SEPARATOR_LINE));
            out.push('\n');
        }
    }
}

// Literals are told apart by value and inferred type, e.g. `(10, int)`.
fn grouping_key(token: &Token) -> String {
    match token.kind {
        TokenKind::Literal(literal_type) => format!("({}, {})", token.value, literal_type),
        _ => token.value.clone(),
    }
}
