use crate::domain::model::{Timestamp, Value};
use crate::domain::ports::ValueSource;
use crate::utils::error::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlSource;

impl ValueSource for TomlSource {
    fn format_name(&self) -> &'static str {
        "toml"
    }

    fn parse_str(&self, content: &str) -> Result<Value> {
        let table: toml::Table = toml::from_str(content)?;
        Ok(toml::Value::Table(table).into())
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::from(i),
            toml::Value::Float(f) => Value::Number(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => datetime_to_value(&dt),
            toml::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            toml::Value::Table(table) => {
                Value::object(table.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl From<&toml::Value> for Value {
    fn from(value: &toml::Value) -> Self {
        value.clone().into()
    }
}

/// Offset datetimes map to their exact instant, local datetimes and dates
/// are read as UTC, and a bare time of day stays a string.
fn datetime_to_value(dt: &toml::value::Datetime) -> Value {
    let text = dt.to_string();
    let timestamp = match (dt.date.is_some(), dt.time.is_some(), dt.offset.is_some()) {
        (true, true, true) => DateTime::parse_from_rfc3339(&text)
            .map(|parsed| Timestamp::from_datetime(&parsed))
            .ok(),
        (true, true, false) => NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|parsed| Timestamp::from_datetime(&parsed.and_utc()))
            .ok(),
        (true, false, _) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|parsed| Timestamp::from_datetime(&parsed.and_utc())),
        _ => return Value::String(text),
    };
    Value::Date(timestamp.unwrap_or_else(|| {
        tracing::debug!("Unparseable TOML datetime '{}'", text);
        Timestamp::invalid()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::equality::loose_equal;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_offset_datetimes_compare_by_instant() {
        let value = TomlSource
            .parse_str("a = 2024-01-15T10:30:00Z\nb = 2024-01-15T12:30:00+02:00\n")
            .unwrap();
        let a = value.property("a").unwrap();
        let b = value.property("b").unwrap();
        assert!(matches!(*a, Value::Date(_)));
        assert!(loose_equal(&a, &b));
    }

    #[test]
    fn test_local_date_is_utc_midnight() {
        let value = TomlSource.parse_str("d = 2024-03-20\n").unwrap();
        let expected = Value::from(Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap());
        assert!(loose_equal(&value.property("d").unwrap(), &expected));
    }

    #[test]
    fn test_local_time_stays_text() {
        let value = TomlSource.parse_str("t = 07:32:00\n").unwrap();
        assert!(matches!(&*value.property("t").unwrap(), Value::String(s) if s == "07:32:00"));
    }

    #[test]
    fn test_numbers_and_tables() {
        let value = TomlSource
            .parse_str("n = 3\nf = 0.5\n[inner]\nlist = [1, \"2\"]\n")
            .unwrap();
        let expected = Value::from(serde_json::json!({
            "n": "3",
            "f": 0.5,
            "inner": {"list": ["1", 2]}
        }));
        assert!(loose_equal(&value, &expected));
    }
}
