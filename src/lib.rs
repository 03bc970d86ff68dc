pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::load_value;
pub use crate::config::job_config::JobConfig;
pub use crate::core::equality::loose_equal;
pub use crate::core::index::{loose_contains, loose_index_of, loose_position, loose_remove};
pub use crate::core::job::{JobReport, JobRunner};
pub use crate::domain::model::{Object, Symbol, Timestamp, Value};
pub use crate::domain::ports::{HostObject, TraversalError, ValueSource};
pub use crate::utils::error::{CompareError, Result};
