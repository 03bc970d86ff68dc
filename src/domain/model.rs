use crate::domain::ports::{HostObject, TraversalError};
use chrono::{DateTime, TimeZone, Utc};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A dynamically typed value.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Array(Vec<Value>),
    Date(Timestamp),
    Object(Object),
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A unique symbol. Clones share identity; two `Symbol::new` calls never do.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(str::to_string),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn same_identity(&self, other: &Symbol) -> bool {
        self.id == other.id
    }
}

/// An instant in milliseconds since the Unix epoch, or an invalid date.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp(Option<i64>);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Self(Some(millis))
    }

    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(Some(datetime.timestamp_millis()))
    }

    pub fn invalid() -> Self {
        Self(None)
    }

    pub fn millis(&self) -> Option<i64> {
        self.0
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.0.and_then(DateTime::from_timestamp_millis)
    }
}

#[derive(Clone)]
pub enum Object {
    Plain(HashMap<String, Value>),
    Host(Arc<dyn HostObject>),
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Plain(map) => f.debug_map().entries(map.iter()).finish(),
            Object::Host(host) => write!(f, "Host({:?})", host),
        }
    }
}

impl Value {
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Object::Plain(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn array<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn host(host: impl HostObject + 'static) -> Self {
        Value::Object(Object::Host(Arc::new(host)))
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Enumerable own keys: array indices, plain-mapping keys or host keys.
    pub fn own_keys(&self) -> Result<Vec<String>, TraversalError> {
        match self {
            Value::Array(items) => Ok((0..items.len()).map(|i| i.to_string()).collect()),
            Value::Object(Object::Plain(map)) => Ok(map.keys().cloned().collect()),
            Value::Object(Object::Host(host)) => host.own_keys(),
            _ => Ok(Vec::new()),
        }
    }

    /// Property read; missing keys read as `Undefined`.
    pub fn property(&self, key: &str) -> Result<Cow<'_, Value>, TraversalError> {
        let found = match self {
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Value::Object(Object::Plain(map)) => map.get(key),
            Value::Object(Object::Host(host)) => return host.get(key).map(Cow::Owned),
            _ => None,
        };
        Ok(found.map_or(Cow::Owned(Value::Undefined), Cow::Borrowed))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Value::Date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::Date(Timestamp::from_datetime(&value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn skipped_in_objects(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Symbol(_))
}

// JSON rendering: undefined and symbols become null inside arrays and are
// dropped from objects, invalid dates become null.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else if n.is_finite() {
                    serializer.serialize_f64(*n)
                } else {
                    serializer.serialize_unit()
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(ts) => match ts.to_datetime() {
                Some(dt) => serializer.serialize_str(
                    &dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                ),
                None => serializer.serialize_unit(),
            },
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(Object::Plain(entries)) => {
                let mut keys: Vec<&String> = entries
                    .iter()
                    .filter(|(_, v)| !skipped_in_objects(v))
                    .map(|(k, _)| k)
                    .collect();
                keys.sort();
                let mut map = serializer.serialize_map(Some(keys.len()))?;
                for key in keys {
                    map.serialize_entry(key, &entries[key])?;
                }
                map.end()
            }
            Value::Object(Object::Host(host)) => {
                let keys = host.own_keys().map_err(S::Error::custom)?;
                let mut map = serializer.serialize_map(None)?;
                for key in keys {
                    let value = host.get(&key).map_err(S::Error::custom)?;
                    if !skipped_in_objects(&value) {
                        map.serialize_entry(&key, &value)?;
                    }
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_symbol_identity() {
        let a = Symbol::new(Some("id"));
        let b = Symbol::new(Some("id"));
        assert!(a.same_identity(&a.clone()));
        assert!(!a.same_identity(&b));
        assert_eq!(b.description(), Some("id"));
    }

    #[test]
    fn test_timestamp_ignores_timezone() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 12, 30, 0)
            .unwrap();
        assert_eq!(
            Timestamp::from_datetime(&utc).millis(),
            Timestamp::from_datetime(&plus_two).millis()
        );
        assert!(Timestamp::invalid().to_datetime().is_none());
    }

    #[test]
    fn test_property_reads_missing_keys_as_undefined() {
        let value = Value::object([("a", Value::from(1))]);
        assert!(matches!(*value.property("a").unwrap(), Value::Number(n) if n == 1.0));
        assert!(matches!(*value.property("b").unwrap(), Value::Undefined));

        let array = Value::array([Value::from("x")]);
        assert_eq!(array.own_keys().unwrap(), vec!["0".to_string()]);
        assert!(matches!(*array.property("3").unwrap(), Value::Undefined));
    }

    #[test]
    fn test_serialize_follows_json_rules() {
        let value = Value::object([
            ("n", Value::from(3)),
            ("f", Value::from(1.5)),
            ("skip", Value::Undefined),
            ("list", Value::array([Value::Undefined, Value::Number(f64::NAN)])),
            ("when", Value::Date(Timestamp::from_millis(0))),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            r#"{"f":1.5,"list":[null,null],"n":3,"when":"1970-01-01T00:00:00.000Z"}"#
        );
    }
}
