//! Property tests for hotkey recognition and tree membership

use ahk_hotkey_parser::core::parser::{parse_comment, parse_hotkey};
use ahk_hotkey_parser::{Expression, ExpressionTree, Modifiers, Parser};
use proptest::prelude::*;

const PLAIN_SYMBOLS: &[char] = &['#', '!', '^', '+', '*', '~', '$'];
const ALL_SYMBOLS: &[char] = &['#', '!', '^', '+', '<', '>', '*', '~', '$'];

fn union_of(symbols: &str) -> Modifiers {
    symbols
        .chars()
        .filter_map(Modifiers::from_symbol)
        .fold(Modifiers::empty(), |acc, m| acc | m)
}

/// Zero or more modifiers with no Left/Right
fn plain_modifiers() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PLAIN_SYMBOLS), 0..6)
        .prop_map(|symbols| symbols.into_iter().collect())
}

/// Any printable, non-whitespace key that is not a modifier, ':', '&' or ';'
fn key_char() -> impl Strategy<Value = char> {
    prop::char::range('!', '~').prop_filter("not a reserved symbol", |c| {
        Modifiers::from_symbol(*c).is_none() && !matches!(c, ':' | '&' | ';')
    })
}

proptest! {
    #[test]
    fn modifier_only_hotkey_yields_union(
        symbols in plain_modifiers().prop_filter("non-empty", |s| !s.is_empty()),
    ) {
        let hotkey = parse_hotkey(&format!("{}::", symbols)).unwrap();

        prop_assert_eq!(hotkey.first().modifiers, union_of(&symbols));
        prop_assert_eq!(hotkey.first().key, None);
        prop_assert!(hotkey.second().is_none());
    }

    #[test]
    fn modifiers_then_key_yields_key(symbols in plain_modifiers(), key in key_char()) {
        let hotkey = parse_hotkey(&format!("{}{}::", symbols, key)).unwrap();

        prop_assert_eq!(hotkey.first().modifiers, union_of(&symbols));
        prop_assert_eq!(hotkey.first().key, Some(key));
    }

    #[test]
    fn directional_pairs_combine(
        direction in prop::sample::select(&['<', '>'][..]),
        partner in prop::sample::select(ALL_SYMBOLS),
        key in key_char(),
    ) {
        let line = format!("{}{}{}::", direction, partner, key);
        let hotkey = parse_hotkey(&line).unwrap();

        let pair = format!("{}{}", direction, partner);
        prop_assert_eq!(hotkey.first().modifiers, union_of(&pair));
    }

    #[test]
    fn two_keys_without_chord_fail(a in key_char(), b in key_char(), symbols in plain_modifiers()) {
        let line = format!("{}{}{}::", symbols, a, b);
        prop_assert!(parse_hotkey(&line).is_none());
    }

    #[test]
    fn chord_halves_are_independent(
        m1 in plain_modifiers(), k1 in key_char(),
        m2 in plain_modifiers(), k2 in key_char(),
    ) {
        let hotkey = parse_hotkey(&format!("{}{} & {}{}::", m1, k1, m2, k2)).unwrap();
        let second = hotkey.second().unwrap();

        prop_assert_eq!(hotkey.first().modifiers, union_of(&m1));
        prop_assert_eq!(hotkey.first().key, Some(k1));
        prop_assert_eq!(second.modifiers, union_of(&m2));
        prop_assert_eq!(second.key, Some(k2));
    }

    #[test]
    fn comment_text_starts_at_first_marker(prefix in "[a-zA-Z ]{0,10}", body in "[^\r\n]{0,20}") {
        let line = format!("{};{}", prefix, body);
        let comment = parse_comment(&line).unwrap();

        prop_assert_eq!(comment.text(), &line[prefix.len()..]);
    }

    #[test]
    fn parsed_hotkeys_are_members(symbols in plain_modifiers(), key in key_char()) {
        let line = format!("{}{}::", symbols, key);
        let mut parser = Parser::new();
        prop_assert!(parser.try_parse(&line));

        let expected = Expression::from(parse_hotkey(&line.to_uppercase()).unwrap());
        prop_assert!(parser.script().contains(&expected));
    }
}

#[test]
fn empty_tree_contains_nothing() {
    let tree = ExpressionTree::new();
    let hotkey = Expression::from(parse_hotkey("^k::").unwrap());
    assert!(!tree.contains(&hotkey));
}
