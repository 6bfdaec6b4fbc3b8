//! Unit tests for report rendering.

use pretty_assertions::assert_eq;

use super::{
    lexemes::render_lexemes, listing::render_listing, LexemeTable, Report, Statistics,
    SEPARATOR_LINE,
};
use crate::lexer::lexer::tokenize;

const SOURCE: &str = "int x = 5;\nx = x + 1;";

#[test]
fn test_render_full_report() {
    let tokens = tokenize(SOURCE);
    let report = Report::new(false).render(&tokens);

    let s = SEPARATOR_LINE;
    let table = |label: &str, rows: &str| format!("{label}\n{s}\ni\tcnt\tval\n{s}\n{rows}{s}\n\n");

    let expected = [
        "\n1\tKEY(int)ID(x)OP(=)LIT(5, int)SEP(;)\n2\tID(x)OP(=)ID(x)OP(+)LIT(1, int)SEP(;)EOF\n\n".to_string(),
        "\nStats\n\n\n".to_string(),
        table("EOF", "1\t1\t\n"),
        table("IDENTIFIER", "1\t3\tx\n"),
        table("KEYWORD", "1\t1\tint\n"),
        table("LITERAL", "1\t1\t(5, int)\n2\t1\t(1, int)\n"),
        table("OPERATOR", "1\t2\t=\n2\t1\t+\n"),
        table("SEPARATOR", "1\t2\t;\n"),
        format!("Lexemes\n{s}\nint <ID1> = <ID2> ; \n<ID1> = <ID1> + <ID3> ; \n{s}\n"),
    ]
    .concat();

    assert_eq!(report, expected);
}

#[test]
fn test_render_empty_token_list() {
    assert_eq!(Report::new(true).render(&[]), "");
}

#[test]
fn test_listing_highlights_errors_only_with_colors() {
    let tokens = tokenize("a # b");

    let mut plain = String::new();
    render_listing(&mut plain, &tokens, false);
    assert_eq!(plain, "\n1\tID(a)ERR(#)ID(b)EOF\n\n");

    let mut colored = String::new();
    render_listing(&mut colored, &tokens, true);
    assert_eq!(colored, "\n1\tID(a)\x1b[1;31mERR(#)\x1b[0mID(b)EOF\n\n");
}

#[test]
fn test_listing_numbers_lines_from_flags() {
    let tokens = tokenize("a\n\n\nb\n");

    let mut out = String::new();
    render_listing(&mut out, &tokens, false);
    // blank source lines do not produce output lines
    assert_eq!(out, "\n1\tID(a)\n2\tID(b)\n3\tEOF\n\n");
}

#[test]
fn test_statistics_groups_literals_by_type() {
    let tokens = tokenize("10 10L 10 'a' \"a\" x y x");
    let stats = Statistics::collect(&tokens);

    let labels: Vec<&str> = stats.groups.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec!["EOF", "IDENTIFIER", "LITERAL"]);

    let literals = stats.group("LITERAL").unwrap();
    let keys: Vec<(&str, usize)> = literals.counts.iter().map(|(k, &c)| (k.as_str(), c)).collect();
    assert_eq!(
        keys,
        vec![
            ("(10, int)", 2),
            ("(10L, long)", 1),
            ("('a', char)", 1),
            ("(\"a\", String)", 1)
        ]
    );
    assert_eq!(literals.total(), 5);
    assert_eq!(stats.group("IDENTIFIER").unwrap().counts["x"], 2);
    assert!(stats.group("KEYWORD").is_none());
}

#[test]
fn test_statistics_errors_keyed_by_message() {
    let tokens = tokenize("\"a\n\"b\n#");
    let stats = Statistics::collect(&tokens);

    let errors = stats.group("ERROR").unwrap();
    assert_eq!(errors.counts["Unterminated string literal"], 2);
    assert_eq!(errors.counts["#"], 1);
}

#[test]
fn test_lexeme_ids_are_stable() {
    let tokens = tokenize("a = b;\nb = a + 1;\nc = 1;");

    let mut out = String::new();
    let table = render_lexemes(&mut out, &tokens);

    let s = SEPARATOR_LINE;
    assert_eq!(
        out,
        format!("Lexemes\n{s}\n<ID1> = <ID2> ; \n<ID2> = <ID1> + <ID3> ; \n<ID4> = <ID3> ; \n{s}\n")
    );
    assert_eq!(table.len(), 4);
    assert_eq!(table.get("1"), Some(3));
    assert_eq!(table.get("missing"), None);
}

#[test]
fn test_lexeme_table_assigns_on_first_occurrence() {
    let mut table = LexemeTable::new();
    assert!(table.is_empty());

    assert_eq!(table.id_of("x"), 1);
    assert_eq!(table.id_of("\"x\""), 2);
    assert_eq!(table.id_of("x"), 1);

    let entries: Vec<(&str, usize)> = table.entries().collect();
    assert_eq!(entries, vec![("x", 1), ("\"x\"", 2)]);
}
