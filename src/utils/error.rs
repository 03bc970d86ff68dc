use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unsupported input format for '{path}'")]
    UnsupportedFormat { path: String },

    #[error("{failed} of {total} comparison cases did not match their expectation")]
    ExpectationFailed { failed: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::IoError(_)
            | CompareError::SerializationError(_)
            | CompareError::TomlError(_)
            | CompareError::CsvError(_)
            | CompareError::UnsupportedFormat { .. } => ErrorCategory::Input,
            CompareError::ConfigValidationError { .. }
            | CompareError::InvalidConfigValueError { .. }
            | CompareError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CompareError::ExpectationFailed { .. } => ErrorCategory::Comparison,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CompareError::ExpectationFailed { .. } => ErrorSeverity::Medium,
            CompareError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Exit status used by the command line front end.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CompareError::IoError(_) => "Check that the input files exist and are readable",
            CompareError::SerializationError(_) => "Make sure the input is well-formed JSON",
            CompareError::TomlError(_) => "Make sure the input is well-formed TOML",
            CompareError::CsvError(_) => "Make sure the CSV input has a header row and consistent columns",
            CompareError::UnsupportedFormat { .. } => "Use a .json, .toml, .csv or .tsv input file",
            CompareError::ConfigValidationError { .. }
            | CompareError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the job configuration"
            }
            CompareError::MissingConfigError { .. } => {
                "Add the missing field to the job configuration"
            }
            CompareError::ExpectationFailed { .. } => {
                "Inspect the failing cases in the report above"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Configuration => format!("Invalid job configuration: {}", self),
            ErrorCategory::Comparison => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expectation_failures_are_not_critical() {
        let err = CompareError::ExpectationFailed { failed: 1, total: 3 };
        assert_eq!(err.category(), ErrorCategory::Comparison);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "1 of 3 comparison cases did not match their expectation"
        );
    }

    #[test]
    fn test_config_errors_map_to_configuration_category() {
        let err = CompareError::MissingConfigError {
            field: "cases[0].left".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().starts_with("Invalid job configuration"));
    }

    #[test]
    fn test_unsupported_format_suggestion_lists_every_extension() {
        let err = CompareError::UnsupportedFormat {
            path: "doc.yaml".to_string(),
        };
        for ext in crate::adapters::SUPPORTED_EXTENSIONS {
            assert!(
                err.recovery_suggestion().contains(&format!(".{}", ext)),
                "suggestion does not mention .{}",
                ext
            );
        }
        assert_eq!(err.exit_code(), 2);
    }
}
