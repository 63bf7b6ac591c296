//! Property-based tests for the canonical encoder.
//!
//! Random mutation sequences and random literals check the guarantees that
//! hold for every document, not just the hand-picked ones.

use proptest::prelude::*;
use serde_rjson::{marshal, to_string, Decimal, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Op {
    Set(String, Option<bool>),
    Delete(String),
    Append(Option<i64>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-e]{1,2}", proptest::option::of(any::<bool>())).prop_map(|(k, v)| Op::Set(k, v)),
        "[a-e]{1,2}".prop_map(Op::Delete),
        proptest::option::of(any::<i64>()).prop_map(Op::Append),
    ]
}

fn scalar(flag: Option<bool>) -> Value {
    flag.map_or(Value::Void, Value::bool)
}

fn contains_void(value: &Value) -> bool {
    match value {
        Value::Void => true,
        Value::Object(map) => map.values().any(contains_void),
        Value::Array(items) => items.iter().any(contains_void),
        _ => false,
    }
}

fn literal_strategy() -> impl Strategy<Value = String> {
    ("-?", "[1-9][0-9]{0,20}", proptest::option::of("[0-9]{1,10}")).prop_map(
        |(sign, int_part, frac)| match frac {
            Some(frac) => format!("{}{}.{}", sign, int_part, frac),
            None => format!("{}{}", sign, int_part),
        },
    )
}

proptest! {
    #[test]
    fn prop_mutations_never_store_void(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut doc = Value::object();
        let mut list = Value::array();
        for op in ops {
            match op {
                Op::Set(key, flag) => doc.set(key, scalar(flag)),
                Op::Delete(key) => doc.delete(&key),
                Op::Append(n) => list.append(n.map_or(Value::Void, Value::from)),
            }
        }
        doc.set("list", list);

        prop_assert!(!contains_void(&doc));
        prop_assert!(marshal(&doc).is_ok());
    }

    #[test]
    fn prop_output_ends_with_single_newline(map in prop::collection::btree_map("[a-z]{0,6}", any::<i32>(), 0..10)) {
        let text = to_string(&map).unwrap();
        prop_assert!(text.ends_with('\n'));
        prop_assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn prop_keys_emitted_sorted(entries in prop::collection::vec(("[ -~]{0,8}", any::<bool>()), 0..12)) {
        let mut doc = Value::object();
        let mut expected = BTreeMap::new();
        for (key, flag) in entries {
            doc.set(key.clone(), Value::bool(flag));
            expected.insert(key, flag);
        }

        let direct = marshal(&doc).unwrap();
        let via_serde = to_string(&expected).unwrap();
        prop_assert_eq!(direct, via_serde);
    }

    #[test]
    fn prop_decimal_literal_is_stable(literal in literal_strategy()) {
        let value = Value::number(&literal);
        let text = marshal(&value).unwrap();
        let reparsed: Decimal = text.trim_end().parse().unwrap();
        prop_assert_eq!(reparsed.to_string(), text.trim_end());
        prop_assert_eq!(text.trim_end(), literal.as_str());
    }

    #[test]
    fn prop_i64_exact(n in any::<i64>()) {
        prop_assert_eq!(to_string(&n).unwrap(), format!("{}\n", n));
    }

    #[test]
    fn prop_try_i64_inverts_from(n in any::<i64>()) {
        prop_assert_eq!(Value::from(n).try_i64().unwrap(), n);
    }

    #[test]
    fn prop_nesting_depth_checked(depth in 1usize..40, limit in 1usize..40) {
        let mut doc = Value::array();
        for _ in 1..depth {
            doc = Value::from(vec![doc]);
        }
        let options = serde_rjson::RjsonOptions::new().with_max_depth(limit);
        let result = serde_rjson::marshal_with_options(&doc, options);
        prop_assert_eq!(result.is_ok(), depth <= limit);
    }
}
