use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_literals() {
    assert_eq!(Expr::number(10.0).to_string(), "10");
    assert_eq!(Expr::string("hi there").to_string(), "\"hi there\"");
    assert_eq!(Expr::string("").to_string(), "\"\"");
}

#[test]
fn test_display_large_numbers_as_digits() {
    assert_eq!(Expr::number(1e21).to_string(), format!("1{}", "0".repeat(21)));
    let printed = Expr::number(f64::INFINITY).to_string();
    assert_eq!(printed.len(), 310);
    assert!(printed.starts_with('1'));
    assert!(printed[1..].bytes().all(|b| b == b'0'));
}

#[test]
fn test_display_nested_apply() {
    let expr = Expr::apply(
        Expr::word("f"),
        vec![
            Expr::apply(Expr::word("g"), vec![Expr::number(1.0)]),
            Expr::number(2.0),
        ],
    );
    assert_eq!(expr.to_string(), "f(g(1), 2)");
}

#[test]
fn test_display_chained_apply() {
    let expr = Expr::apply(
        Expr::apply(Expr::word("f"), vec![Expr::word("x")]),
        vec![Expr::word("y")],
    );
    assert_eq!(expr.to_string(), "f(x)(y)");
}

#[test]
fn test_display_empty_args() {
    let expr = Expr::apply(Expr::word("now"), vec![]);
    assert_eq!(expr.to_string(), "now()");
}

#[test]
fn test_as_word() {
    assert_eq!(Expr::word("+").as_word(), Some("+"));
    assert_eq!(Expr::number(1.0).as_word(), None);
    assert_eq!(Expr::apply(Expr::word("f"), vec![]).as_word(), None);
}

#[test]
fn test_kind_name() {
    assert_eq!(Expr::string("a").kind_name(), "value");
    assert_eq!(Expr::word("a").kind_name(), "word");
    assert_eq!(Expr::apply(Expr::word("a"), vec![]).kind_name(), "apply");
}

#[test]
fn test_word_chars() {
    for ch in ['a', '+', '>', '=', '_', '1', 'é', '.'] {
        assert!(is_word_char(ch), "{ch:?} should be a word char");
    }
    for ch in [' ', '\t', '\n', '(', ')', ',', '#', '"'] {
        assert!(!is_word_char(ch), "{ch:?} should not be a word char");
    }
}

#[test]
fn test_whitespace_set() {
    for ch in [' ', '\t', '\n', '\r', '\u{b}', '\u{c}', '\u{a0}', '\u{2028}', '\u{3000}'] {
        assert!(is_whitespace(ch), "{ch:?} should be whitespace");
    }
    assert!(is_whitespace('\u{feff}'));
    assert!(!is_word_char('\u{feff}'));
    assert!(!is_whitespace('\u{85}'));
    assert!(is_word_char('\u{85}'));
}
