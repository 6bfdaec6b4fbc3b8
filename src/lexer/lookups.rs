use lazy_static::lazy_static;
use std::collections::HashSet;

#[rustfmt::skip]
const KEYWORDS: &[&str] = &[
    "abstract", "assert",
    "boolean", "break", "byte",
    "case", "catch", "char", "class", "continue",
    "default", "do", "double",
    "else", "enum", "extends",
    "final", "finally", "float", "for",
    "if", "implements", "import", "instanceof", "int", "interface",
    "long",
    "native", "new",
    "package", "private", "protected", "public",
    "return",
    "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "try",
    "void", "volatile",
    "while",
];

const LITERAL_KEYWORDS: &[&str] = &["true", "false", "null"];

#[rustfmt::skip]
const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%",
    "++", "--",
    "==", "!=", "<", ">", "<=", ">=",
    "&&", "||", "!",
    "&", "|", "^", "~",
    "<<", ">>", ">>>",
    "=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=",
    "<<=", ">>=", ">>>=",
    "?", ":", "->", "::", ".",
];

const SEPARATORS: &[&str] = &["(", ")", "{", "}", "[", "]", ";", ",", "..."];

lazy_static! {
    pub static ref JAVA_REGISTRY: Registry = Registry::new(KEYWORDS, LITERAL_KEYWORDS, OPERATORS, SEPARATORS);
}

/// Fixed lexeme sets consulted by the lexer. Immutable once built.
#[derive(Debug, Clone)]
pub struct Registry {
    keywords: HashSet<&'static str>,
    literal_keywords: HashSet<&'static str>,
    operators: Vec<&'static str>,
    separators: Vec<&'static str>,
    operator_set: HashSet<&'static str>,
    separator_set: HashSet<&'static str>,
    max_operator_len: usize,
    max_separator_len: usize,
}

impl Registry {
    pub fn new(
        keywords: &[&'static str],
        literal_keywords: &[&'static str],
        operators: &[&'static str],
        separators: &[&'static str],
    ) -> Self {
        let operators = sorted_by_length(operators);
        let separators = sorted_by_length(separators);

        Registry {
            keywords: keywords.iter().copied().collect(),
            literal_keywords: literal_keywords.iter().copied().collect(),
            operator_set: operators.iter().copied().collect(),
            separator_set: separators.iter().copied().collect(),
            max_operator_len: operators.first().map_or(0, |op| op.len()),
            max_separator_len: separators.first().map_or(0, |sep| sep.len()),
            operators,
            separators,
        }
    }

    pub fn is_keyword(&self, value: &str) -> bool {
        self.keywords.contains(value)
    }

    pub fn is_literal_keyword(&self, value: &str) -> bool {
        self.literal_keywords.contains(value)
    }

    pub fn is_operator(&self, value: &str) -> bool {
        self.operator_set.contains(value)
    }

    pub fn is_separator(&self, value: &str) -> bool {
        self.separator_set.contains(value)
    }

    /// Operators, longest first.
    pub fn operators(&self) -> &[&'static str] {
        &self.operators
    }

    /// Separators, longest first.
    pub fn separators(&self) -> &[&'static str] {
        &self.separators
    }

    pub fn max_operator_len(&self) -> usize {
        self.max_operator_len
    }

    pub fn max_separator_len(&self) -> usize {
        self.max_separator_len
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

fn sorted_by_length(lexemes: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = lexemes.to_vec();
    // stable, so equal lengths keep declaration order
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}
