use crate::domain::model::Value;
use crate::utils::error::Result;
use std::fmt;
use thiserror::Error;

/// Failure while walking a composite value, e.g. a property whose access fails.
///
/// The comparator never surfaces this; it degrades to "not equal".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot traverse value: {message}")]
pub struct TraversalError {
    pub message: String,
}

impl TraversalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A composite value owned by the embedder rather than by [`Value`] itself.
///
/// Key enumeration and property reads may fail. Properties that do not exist
/// should read as `Ok(Value::Undefined)`.
pub trait HostObject: Send + Sync + fmt::Debug {
    fn own_keys(&self) -> std::result::Result<Vec<String>, TraversalError>;

    fn get(&self, key: &str) -> std::result::Result<Value, TraversalError>;

    /// Tag reported by `raw_type`, `"Object"` for plain-looking objects.
    fn class_name(&self) -> &str {
        "Object"
    }
}

/// A document format that can be turned into a [`Value`].
pub trait ValueSource: Send + Sync {
    fn format_name(&self) -> &'static str;

    fn parse_str(&self, content: &str) -> Result<Value>;
}
