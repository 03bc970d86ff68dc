pub mod coerce;
pub mod equality;
pub mod index;
pub mod job;
pub mod kind;

pub use crate::domain::model::{Object, Symbol, Timestamp, Value};
pub use crate::domain::ports::{HostObject, TraversalError, ValueSource};
pub use crate::utils::error::Result;
