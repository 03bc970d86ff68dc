use crate::domain::model::{Object, Value};

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_BOOLEAN: &str = "boolean";
pub const TYPE_STR_STRING: &str = "string";
pub const TYPE_STR_SYMBOL: &str = "symbol";
pub const TYPE_STR_NUMBER: &str = "number";
pub const TYPE_STR_OBJECT: &str = "object";

/// Coarse classification used to dispatch structural comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Primitive,
    Array,
    Date,
    PlainMapping,
    Other,
}

impl Kind {
    /// Non-null composite value.
    pub fn is_object(self) -> bool {
        self != Kind::Primitive
    }
}

pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Symbol(_) => Kind::Primitive,
        Value::Array(_) => Kind::Array,
        Value::Date(_) => Kind::Date,
        Value::Object(Object::Plain(_)) => Kind::PlainMapping,
        Value::Object(Object::Host(_)) => Kind::Other,
    }
}

/// The `typeof` tag. `null` reports `"object"`.
pub fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Undefined => TYPE_STR_UNDEFINED,
        Value::Bool(_) => TYPE_STR_BOOLEAN,
        Value::Number(_) => TYPE_STR_NUMBER,
        Value::String(_) => TYPE_STR_STRING,
        Value::Symbol(_) => TYPE_STR_SYMBOL,
        Value::Null | Value::Array(_) | Value::Date(_) | Value::Object(_) => TYPE_STR_OBJECT,
    }
}

/// The internal class tag, e.g. `"Array"`, `"Date"`, `"Object"`.
pub fn raw_type(value: &Value) -> &str {
    match value {
        Value::Undefined => "Undefined",
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Symbol(_) => "Symbol",
        Value::Array(_) => "Array",
        Value::Date(_) => "Date",
        Value::Object(Object::Plain(_)) => "Object",
        Value::Object(Object::Host(host)) => host.class_name(),
    }
}

pub fn is_object(value: &Value) -> bool {
    classify(value).is_object()
}

/// String, number, symbol or boolean. `null` and `undefined` are not included.
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Symbol(_)
    )
}

pub fn is_plain_object(value: &Value) -> bool {
    raw_type(value) == "Object"
}
