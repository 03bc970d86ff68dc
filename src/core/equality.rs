//! Loose structural equality.
//!
//! Two values are loose-equal when they have the same structure and their
//! leaves agree after string coercion, so `1` and `"1"` match while `null`
//! and `undefined` do not. Arrays are compared index by index, dates by
//! instant, and every other composite by its enumerable own keys.
//!
//! There is no cycle detection. A host object graph that reaches itself
//! recurses until the stack is exhausted; callers comparing untrusted data
//! must bound its shape first.

use crate::core::coerce::to_js_string;
use crate::core::kind::{classify, Kind};
use crate::domain::model::{Object, Value};
use crate::domain::ports::TraversalError;
use std::sync::Arc;

/// Deep loose equality. Never fails: traversal errors compare as unequal.
pub fn loose_equal(a: &Value, b: &Value) -> bool {
    if strictly_equal(a, b) {
        return true;
    }

    let kind_a = classify(a);
    let kind_b = classify(b);

    match (kind_a.is_object(), kind_b.is_object()) {
        (true, true) => match compare_composite(a, kind_a, b, kind_b) {
            Ok(equal) => equal,
            Err(e) => {
                tracing::debug!(error = %e, "structural traversal failed, values compare unequal");
                false
            }
        },
        (false, false) => to_js_string(a) == to_js_string(b),
        _ => false,
    }
}

/// Identity fast path: same reference, or primitives equal without coercion.
fn strictly_equal(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.same_identity(y),
        (Value::Object(Object::Host(x)), Value::Object(Object::Host(y))) => Arc::ptr_eq(x, y),
        _ => false,
    }
}

fn compare_composite(
    a: &Value,
    kind_a: Kind,
    b: &Value,
    kind_b: Kind,
) -> Result<bool, TraversalError> {
    match (a, b) {
        (Value::Array(xs), Value::Array(ys)) => Ok(xs.len() == ys.len()
            && xs.iter().zip(ys).all(|(x, y)| loose_equal(x, y))),
        (Value::Date(x), Value::Date(y)) => {
            Ok(matches!((x.millis(), y.millis()), (Some(p), Some(q)) if p == q))
        }
        _ if kind_a != Kind::Array && kind_b != Kind::Array => compare_keyed(a, b),
        _ => Ok(false),
    }
}

// Only key counts are compared; keys missing from `b` read as undefined.
fn compare_keyed(a: &Value, b: &Value) -> Result<bool, TraversalError> {
    let keys_a = a.own_keys()?;
    let keys_b = b.own_keys()?;
    if keys_a.len() != keys_b.len() {
        return Ok(false);
    }
    for key in &keys_a {
        let value_a = a.property(key)?;
        let value_b = b.property(key)?;
        if !loose_equal(&value_a, &value_b) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Timestamp;

    #[test]
    fn test_nan_matches_through_coercion() {
        assert!(loose_equal(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(loose_equal(&Value::Number(f64::NAN), &Value::from("NaN")));
    }

    #[test]
    fn test_invalid_dates_never_match() {
        let invalid = Value::Date(Timestamp::invalid());
        assert!(!loose_equal(&invalid, &Value::Date(Timestamp::invalid())));
        // Same reference still takes the fast path.
        assert!(loose_equal(&invalid, &invalid));
    }

    #[test]
    fn test_date_has_no_own_keys() {
        let date = Value::Date(Timestamp::from_millis(5));
        assert!(loose_equal(&date, &Value::object::<&str, _>([])));
        assert!(!loose_equal(&date, &Value::object([("a", Value::from(1))])));
        assert!(!loose_equal(&date, &Value::array([])));
    }

    #[test]
    fn test_undefined_properties_match_missing_keys() {
        let a = Value::object([("a", Value::Undefined)]);
        let b = Value::object([("b", Value::Undefined)]);
        assert!(loose_equal(&a, &b));
    }
}
