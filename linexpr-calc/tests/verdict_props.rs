//! Property-based tests for per-line verdicts.

use linexpr::ErrorClass;
use linexpr_calc::evaluator::check_and_evaluate;
use linexpr_calc::recognizer::check;
use linexpr_calc::token::{arith_tokens, sigil_tokens};
use proptest::prelude::*;

/// Splices `bad` into `line` at a char boundary picked by `at`.
fn splice(line: &str, at: usize, bad: char) -> String {
    let at = at % (line.chars().count() + 1);
    let mut out: String = line.chars().take(at).collect();
    out.push(bad);
    out.extend(line.chars().skip(at));
    out
}

proptest! {
    #[test]
    fn unknown_char_is_lexical_for_arith(
        line in "[0-9+*\\- ]{0,24}",
        at in 0usize..32,
        bad in "[a-z#.$/]",
    ) {
        let bad = bad.chars().next().unwrap();
        let line = splice(&line, at, bad);
        let err = check(&arith_tokens(&line)).unwrap_err();
        prop_assert_eq!(err.class(), ErrorClass::Lexical);
    }

    #[test]
    fn unknown_char_is_lexical_for_sigil(
        line in "[0-9@^! ]{0,24}",
        at in 0usize..32,
        bad in "[a-z#.$+*\\-]",
    ) {
        let bad = bad.chars().next().unwrap();
        let line = splice(&line, at, bad);
        let err = check_and_evaluate(&sigil_tokens(&line)).unwrap_err();
        prop_assert_eq!(err.class(), ErrorClass::Lexical);
    }

    #[test]
    fn at_chain_is_a_sum(nums in prop::collection::vec(0i64..100_000, 1..12)) {
        let line = nums.iter().map(i64::to_string).collect::<Vec<_>>().join("@");
        prop_assert_eq!(check_and_evaluate(&sigil_tokens(&line)), Ok(nums.iter().sum()));
    }

    #[test]
    fn sums_of_products_are_expressions(
        terms in prop::collection::vec(prop::collection::vec(0u32..1000, 1..4), 1..5),
    ) {
        let line = terms
            .iter()
            .map(|t| t.iter().map(u32::to_string).collect::<Vec<_>>().join("*"))
            .collect::<Vec<_>>()
            .join("+");
        prop_assert!(check(&arith_tokens(&line)).is_ok(), "{:?}", line);
    }
}
