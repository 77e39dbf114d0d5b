//! Property tests over generated value trees.

use json_value::{EncodeOptions, Value};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>()
            .prop_filter("JSON numbers are finite", |n| n.is_finite())
            .prop_map(Value::Number),
        any::<i32>().prop_map(|n| Value::Number(f64::from(n))),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map(".*", inner, 0..8).prop_map(Value::Object),
        ]
    })
}

proptest! {
    #[test]
    fn test_decode_inverts_encode(value in arb_value()) {
        let text = value.encode().unwrap();
        prop_assert_eq!(Value::decode(&text).unwrap(), value);
    }

    #[test]
    fn test_decode_inverts_pretty_encode(value in arb_value()) {
        let text = value.encode_with(&EncodeOptions::pretty()).unwrap();
        prop_assert_eq!(Value::decode(&text).unwrap(), value);
    }

    #[test]
    fn test_decode_slice_inverts_encode_to_vec(value in arb_value()) {
        let bytes = value.encode_to_vec().unwrap();
        prop_assert_eq!(Value::decode_slice(&bytes).unwrap(), value);
    }

    #[test]
    fn test_display_matches_encode(value in arb_value()) {
        prop_assert_eq!(value.to_string(), value.encode().unwrap());
    }

    #[test]
    fn test_serde_json_bridge_preserves_value(value in arb_value()) {
        let json = serde_json::Value::try_from(&value).unwrap();
        prop_assert_eq!(Value::try_from(json).unwrap(), value);
    }

    #[test]
    fn test_passthrough_on_non_object(value in arb_value(), key in ".*") {
        prop_assume!(!value.is_object());
        prop_assert_eq!(value.get(key.as_str()), Some(&value));
        prop_assert_eq!(value.get_strict(key.as_str()), None);
    }

    #[test]
    fn test_passthrough_on_non_array(value in arb_value(), index in 0usize..16) {
        prop_assume!(!value.is_array());
        prop_assert_eq!(value.get(index), Some(&value));
        prop_assert_eq!(value.get_strict(index), None);
        prop_assert_eq!(value.at(index), &value);
    }

    #[test]
    fn test_merge_keeps_receiver_and_adds_missing(
        a in prop::collection::btree_map("[a-e]", arb_value(), 0..5),
        b in prop::collection::btree_map("[a-e]", arb_value(), 0..5),
    ) {
        let merged = Value::Object(a.clone()).merge_object(&Value::Object(b.clone())).unwrap();
        let merged = merged.as_object().unwrap();
        for (key, value) in &a {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &b {
            if !a.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        prop_assert!(merged.keys().all(|k| a.contains_key(k) || b.contains_key(k)));
    }
}

#[test]
fn test_empty_object_round_trips_as_braces() {
    let text = Value::EMPTY_OBJECT.encode().unwrap();
    assert_eq!(text, "{}");
    assert_eq!(Value::decode(&text).unwrap(), Value::EMPTY_OBJECT);
}

#[test]
fn test_nested_empty_containers_round_trip() {
    let value = Value::object([
        ("o", Value::EMPTY_OBJECT),
        ("a", Value::Array(vec![Value::EMPTY_OBJECT, Value::Array(vec![])])),
    ]);
    assert_eq!(value.encode().unwrap(), r#"{"a":[{},[]],"o":{}}"#);
    assert_eq!(Value::decode(&value.encode().unwrap()).unwrap(), value);
}
