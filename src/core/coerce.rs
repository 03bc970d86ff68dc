use crate::core::kind::is_plain_object;
use crate::domain::model::{Object, Value};

/// String coercion as performed by `String(value)`.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.clone(),
        Value::Symbol(sym) => format!("Symbol({})", sym.description().unwrap_or("")),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_nullish() {
                    String::new()
                } else {
                    to_js_string(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Date(ts) => match ts.to_datetime() {
            Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            None => "Invalid Date".to_string(),
        },
        Value::Object(Object::Plain(_)) => "[object Object]".to_string(),
        Value::Object(Object::Host(host)) => format!("[object {}]", host.class_name()),
    }
}

/// Rendering for output: nullish values are empty, arrays and plain objects
/// are pretty-printed JSON.
pub fn to_display_string(value: &Value) -> String {
    if value.is_nullish() {
        return String::new();
    }
    if matches!(value, Value::Array(_)) || is_plain_object(value) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            return json;
        }
    }
    to_js_string(value)
}

/// Number-to-String with shortest round-trip digits.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n < 0.0 {
        return format!("-{}", number_to_string(-n));
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3".
    let scientific = format!("{:e}", n);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the digit string.
    let point = exponent + 1;

    if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let e = point - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, e.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Symbol, Timestamp};

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1234.5), "1234.5");
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(123e20), "1.23e+22");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(-42.25), "-42.25");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_primitive_coercion() {
        assert_eq!(to_js_string(&Value::Null), "null");
        assert_eq!(to_js_string(&Value::Undefined), "undefined");
        assert_eq!(to_js_string(&Value::from(true)), "true");
        assert_eq!(to_js_string(&Symbol::new(Some("k")).into()), "Symbol(k)");
        assert_eq!(to_js_string(&Symbol::new(None).into()), "Symbol()");
    }

    #[test]
    fn test_composite_coercion() {
        let nested = Value::array([
            Value::from(1),
            Value::Null,
            Value::array([Value::from("a"), Value::from("b")]),
        ]);
        assert_eq!(to_js_string(&nested), "1,,a,b");
        assert_eq!(to_js_string(&Value::object([("a", Value::Null)])), "[object Object]");
        assert_eq!(
            to_js_string(&Value::Date(Timestamp::from_millis(86_400_000))),
            "1970-01-02T00:00:00.000Z"
        );
        assert_eq!(to_js_string(&Value::Date(Timestamp::invalid())), "Invalid Date");
    }

    #[test]
    fn test_display_string() {
        assert_eq!(to_display_string(&Value::Null), "");
        assert_eq!(to_display_string(&Value::from(2.5)), "2.5");
        assert_eq!(
            to_display_string(&Value::array([Value::from(1), Value::from(2)])),
            "[\n  1,\n  2\n]"
        );
    }
}
