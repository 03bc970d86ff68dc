use crate::domain::model::Value;
use crate::domain::ports::ValueSource;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl ValueSource for JsonSource {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn parse_str(&self, content: &str) -> Result<Value> {
        let json: serde_json::Value = serde_json::from_str(content)?;
        Ok(json.into())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::equality::loose_equal;
    use serde_json::json;

    #[test]
    fn test_parse_nested_document() {
        let value = JsonSource
            .parse_str(r#"{"id": 1, "tags": ["a", null], "meta": {"ok": true}}"#)
            .unwrap();
        let expected = Value::from(json!({"id": "1", "tags": ["a", null], "meta": {"ok": "true"}}));
        assert!(loose_equal(&value, &expected));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(JsonSource.parse_str("{not json").is_err());
    }
}
