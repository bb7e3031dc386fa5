//! Property-based tests for the table-driven tokenizer.

use linexpr::{Token, TokenKind, Tokenizer};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arith {
    Number,
    Plus,
    Minus,
    Star,
    Invalid,
}

impl TokenKind for Arith {
    const NUMBER: Self = Arith::Number;
    const INVALID: Self = Arith::Invalid;
    const OPERATORS: &'static [(char, Self)] =
        &[('+', Arith::Plus), ('-', Arith::Minus), ('*', Arith::Star)];
    const SIGN: Option<char> = Some('-');
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sigil {
    Number,
    At,
    Caret,
    Bang,
    Invalid,
}

impl TokenKind for Sigil {
    const NUMBER: Self = Sigil::Number;
    const INVALID: Self = Sigil::Invalid;
    const OPERATORS: &'static [(char, Self)] =
        &[('@', Sigil::At), ('^', Sigil::Caret), ('!', Sigil::Bang)];
    const FAIL_FAST: bool = true;
}

proptest! {
    #[test]
    fn digits_tokenize_to_one_number(s in "[0-9]{1,40}") {
        let arith = Tokenizer::<Arith>::tokenize(&s);
        prop_assert_eq!(arith.len(), 1);
        prop_assert_eq!(arith.as_slice()[0].kind(), Arith::Number);
        prop_assert_eq!(arith.as_slice()[0].text(), s.as_str());

        let sigil = Tokenizer::<Sigil>::tokenize(&s);
        prop_assert_eq!(sigil.len(), 1);
        prop_assert_eq!(sigil.as_slice()[0].text(), s.as_str());
    }

    #[test]
    fn arith_lexemes_rebuild_the_non_whitespace_input(s in "[0-9+*\\- a-z$.]{0,40}") {
        let toks = Tokenizer::<Arith>::tokenize(&s);
        let rebuilt: String = toks.lexemes().collect();
        let expected: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn tokens_are_in_input_order(s in "[0-9+*\\- x]{0,40}") {
        let toks = Tokenizer::<Arith>::tokenize(&s);
        for pair in toks.as_slice().windows(2) {
            prop_assert!(pair[0].span().end <= pair[1].span().start);
        }
    }

    #[test]
    fn sigil_scan_ends_at_first_invalid(s in "[0-9@^! ]{0,20}", bad in "[a-z+\\-]", tail in "[0-9@^!a-z]{0,20}") {
        let line = format!("{s}{bad}{tail}");
        let toks = Tokenizer::<Sigil>::tokenize(&line);
        let last = toks.as_slice().last().map(Token::kind);
        prop_assert_eq!(last, Some(Sigil::Invalid));
        prop_assert_eq!(toks.iter().filter(|t| t.is_invalid()).count(), 1);
    }

    #[test]
    fn invalid_tokens_are_single_characters(s in "\\PC{0,30}") {
        let toks = Tokenizer::<Arith>::tokenize(&s);
        for tok in toks.iter().filter(|t| t.is_invalid()) {
            prop_assert_eq!(tok.text().chars().count(), 1);
            prop_assert_eq!(tok.span().len(), 1);
        }
    }
}
