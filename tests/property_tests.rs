//! Property-based tests - pragmatic approach testing the core precision
//! guarantees across a wide range of generated inputs.

use journal_json::{parse_with_bigint, parse_with_lossy_integers, stringify_bigint_json};
use num_bigint::BigInt;
use proptest::prelude::*;

/// A decimal integer literal of up to 40 digits, well past anything i64 or f64
/// can represent.
fn integer_literal() -> impl Strategy<Value = String> {
    prop::string::string_regex("-?[1-9][0-9]{0,39}").unwrap()
}

proptest! {
    #[test]
    fn integer_literals_round_trip_exactly(lit in integer_literal()) {
        let parsed = parse_with_bigint(&lit).unwrap();
        prop_assert_eq!(parsed.as_bigint().unwrap().to_string(), lit.clone());

        let out = stringify_bigint_json(&parsed).unwrap();
        prop_assert_eq!(out, lit);
    }

    #[test]
    fn i64_values_survive_document_round_trip(n in any::<i64>()) {
        let text = format!(r#"{{"id":{}}}"#, n);
        let tree = parse_with_bigint(&text).unwrap();
        prop_assert_eq!(tree.get("id").unwrap().as_bigint(), Some(&BigInt::from(n)));
        prop_assert_eq!(stringify_bigint_json(&tree).unwrap(), text);
    }

    #[test]
    fn small_integers_agree_across_modes(n in -(1i64 << 53)..(1i64 << 53)) {
        let text = n.to_string();
        let lossy = parse_with_lossy_integers(&text).unwrap();
        let precise = parse_with_bigint(&text).unwrap();
        prop_assert_eq!(lossy.as_f64(), Some(n as f64));
        prop_assert_eq!(precise.as_i64(), Some(n));
    }

    #[test]
    fn finite_floats_round_trip(f in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let text = format!(r#"{{"x":{:?}}}"#, f);
        let tree = parse_with_bigint(&text).unwrap();
        let out = stringify_bigint_json(&tree).unwrap();
        let back = parse_with_bigint(&out).unwrap();
        prop_assert_eq!(back, tree);
    }

    #[test]
    fn strings_round_trip(s in "\\PC*") {
        let tree = parse_with_bigint(&stringify_bigint_json(
            &journal_json::JournalValue::from(s.clone()),
        ).unwrap()).unwrap();
        prop_assert_eq!(tree.as_str(), Some(s.as_str()));
    }

    #[test]
    fn modes_agree_on_validity(
        ids in prop::collection::vec(integer_literal(), 0..8),
        floats in prop::collection::vec(proptest::num::f64::NORMAL, 0..8),
    ) {
        let mut fields: Vec<String> = Vec::new();
        for (i, id) in ids.iter().enumerate() {
            fields.push(format!(r#""id{}":{}"#, i, id));
        }
        for (i, f) in floats.iter().enumerate() {
            fields.push(format!(r#""f{}":{:?}"#, i, f));
        }
        let text = format!("{{{}}}", fields.join(","));

        let precise = parse_with_bigint(&text);
        let lossy = parse_with_lossy_integers(&text);
        prop_assert_eq!(precise.is_ok(), lossy.is_ok());
        prop_assert!(precise.is_ok());
    }

    #[test]
    fn bigint_fields_survive_nesting(id in integer_literal(), depth in 1usize..20) {
        let mut text = id.clone();
        for _ in 0..depth {
            text = format!(r#"{{"inner":{}}}"#, text);
        }
        let tree = parse_with_bigint(&text).unwrap();
        prop_assert_eq!(stringify_bigint_json(&tree).unwrap(), text);
    }
}
