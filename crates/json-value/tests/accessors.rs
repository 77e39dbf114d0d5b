use json_value::{Error, Value, ValueKind};

fn decode(text: &str) -> Value {
    Value::decode(text).unwrap()
}

#[test]
fn test_passthrough_chain_over_scalar_is_a_no_op() {
    let scalar = Value::string("leaf");
    let result = scalar.get("a").and_then(|v| v.get(0)).and_then(|v| v.get("b"));
    assert_eq!(result, Some(&scalar));
}

#[test]
fn test_strict_chain_over_scalar_is_absent() {
    let scalar = Value::string("leaf");
    assert_eq!(scalar.get_strict("a"), None);
    assert_eq!(scalar.get_strict(0), None);
}

#[test]
fn test_missing_entries_are_absent_in_both_flavors() {
    let doc = decode(r#"{"list": [1]}"#);
    assert_eq!(doc.get("nope"), None);
    assert_eq!(doc.get_strict("nope"), None);

    let list = doc.get("list").unwrap();
    assert_eq!(list.get(1), None);
    assert_eq!(list.get_strict(1), None);
}

#[test]
fn test_merge_example() {
    let a = decode(r#"{"x": 1}"#);
    let b = decode(r#"{"x": 2, "y": 3}"#);
    let merged = a.merge_object(&b).unwrap();
    assert_eq!(merged, decode(r#"{"x": 1, "y": 3}"#));
    assert_eq!(merged.encode().unwrap(), r#"{"x":1,"y":3}"#);
}

#[test]
fn test_merge_array_with_object_fails() {
    let err = decode("[]").merge_object(&decode("{}")).unwrap_err();
    assert_eq!(
        err,
        Error::MergeOnNonObject {
            receiver: ValueKind::Array,
            argument: ValueKind::Object,
        }
    );
    assert!(!matches!(err, Error::Decode { .. } | Error::Encode(_)));
}

#[test]
fn test_value_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();

    let doc = std::sync::Arc::new(decode(r#"{"n": 5}"#));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = std::sync::Arc::clone(&doc);
            std::thread::spawn(move || doc.get_as::<u8, _>("n"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(5));
    }
}
