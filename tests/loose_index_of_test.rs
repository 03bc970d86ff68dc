use loose_compare::{loose_contains, loose_index_of, loose_remove, Timestamp, Value};
use serde_json::json;

fn seq(json: serde_json::Value) -> Vec<Value> {
    match Value::from(json) {
        Value::Array(items) => items,
        other => panic!("expected an array, got {:?}", other),
    }
}

#[test]
fn test_loose_match_against_numeric_string() {
    let sequence = seq(json!([1, "2", 3]));
    assert_eq!(loose_index_of(&sequence, &Value::from(2)), 1);
    assert_eq!(loose_index_of(&sequence, &Value::from("3")), 2);
}

#[test]
fn test_empty_sequence() {
    assert_eq!(loose_index_of(&[], &Value::from(1)), -1);
    assert_eq!(loose_index_of(&[], &Value::Undefined), -1);
    assert!(!loose_contains(&[], &Value::Null));
}

#[test]
fn test_earliest_duplicate_wins() {
    let sequence = seq(json!([{"a": 1}, {"a": "1"}, {"a": 1}]));
    assert_eq!(loose_index_of(&sequence, &Value::from(json!({"a": 1}))), 0);
}

#[test]
fn test_structural_elements() {
    let sequence = vec![
        Value::from(json!([1, 2])),
        Value::Date(Timestamp::from_millis(42)),
        Value::from(json!({"k": [true]})),
    ];
    assert_eq!(loose_index_of(&sequence, &Value::Date(Timestamp::from_millis(42))), 1);
    assert_eq!(loose_index_of(&sequence, &Value::from(json!({"k": ["true"]}))), 2);
    assert_eq!(loose_index_of(&sequence, &Value::from(json!([2, 1]))), -1);
    assert_eq!(loose_index_of(&sequence, &Value::from(json!({"0": 1, "1": 2}))), -1);
}

#[test]
fn test_null_and_undefined_stay_distinct() {
    let sequence = vec![Value::Null, Value::Undefined];
    assert_eq!(loose_index_of(&sequence, &Value::Undefined), 1);
    assert_eq!(loose_index_of(&sequence, &Value::from("null")), 0);
}

#[test]
fn test_remove_uses_loose_matching() {
    let mut sequence = seq(json!(["a", 1, "1"]));
    assert!(loose_remove(&mut sequence, &Value::from("1")).is_some());
    assert_eq!(sequence.len(), 2);
    assert_eq!(loose_index_of(&sequence, &Value::from(1)), 1);
}
