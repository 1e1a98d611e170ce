use calc::{
    calculate,
    interpreter::{lexer::tokenize, parser::core::parse},
};
use proptest::prelude::*;

/// Well-formed expressions over numbers, constants, calls and the five
/// binary operators.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..1000).prop_map(|n| n.to_string()),
                           (0u32..100, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
                           prop_oneof![Just("pi"), Just("e"), Just("tau")].prop_map(String::from)];

    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(),
                         prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("**")],
                         inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.clone().prop_map(|e| format!("({e})")),
                        (prop_oneof![Just("sin"), Just("sqrt"), Just("abs"), Just("exp")], inner)
                            .prop_map(|(f, e)| format!("{f}({e})"))]
        })
}

proptest! {
    #[test]
    fn well_formed_input_always_evaluates(src in expression()) {
        prop_assert!(calculate(&src).is_ok(), "'{}' failed", src);
    }

    #[test]
    fn evaluating_twice_gives_identical_results(src in expression()) {
        let first = calculate(&src).map(f64::to_bits);
        let second = calculate(&src).map(f64::to_bits);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn printed_tree_parses_back_to_itself(src in expression()) {
        let printed = parse(&tokenize(&src).unwrap()).unwrap().to_string();
        let reprinted = parse(&tokenize(&printed).unwrap()).unwrap().to_string();
        prop_assert_eq!(&printed, &reprinted);
        prop_assert_eq!(calculate(&src).map(f64::to_bits), calculate(&printed).map(f64::to_bits));
    }

    #[test]
    fn number_literals_are_single_tokens(a in 0u32..100_000, b in 0u32..100_000, c in 0u32..100) {
        let literal = format!("{a}.{b}.{c}");
        let tokens = tokenize(&literal).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].text, &literal);
    }
}
