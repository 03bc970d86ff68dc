use crate::adapters::{load_value, SUPPORTED_EXTENSIONS};
use crate::domain::model::Value;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_unique_names,
    Validate,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A batch of comparisons described in TOML.
///
/// ```toml
/// [job]
/// name = "fixtures"
///
/// [[cases]]
/// name = "number matches numeric string"
/// op = "equal"
/// left = 1
/// right = "1"
/// expect = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub job: JobInfo,
    pub settings: Option<JobSettings>,
    #[serde(default)]
    pub cases: Vec<CaseConfig>,
    /// Directory that relative file operands resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSettings {
    pub stop_on_failure: Option<bool>,
    pub monitor: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Equal,
    IndexOf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub name: String,
    pub op: Operation,
    pub left: Option<toml::Value>,
    pub left_file: Option<String>,
    pub right: Option<toml::Value>,
    pub right_file: Option<String>,
    pub sequence: Option<Vec<toml::Value>>,
    pub sequence_file: Option<String>,
    pub value: Option<toml::Value>,
    pub value_file: Option<String>,
    pub expect: Option<toml::Value>,
}

/// Operands of a case after inline values and files have been resolved.
#[derive(Debug, Clone)]
pub enum ResolvedCase {
    Equal { left: Value, right: Value },
    IndexOf { sequence: Vec<Value>, value: Value },
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl JobConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: JobConfig = toml::from_str(&processed_content)?;
        tracing::debug!(
            "Parsed job '{}' with {} cases",
            config.job.name,
            config.cases.len()
        );
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown variables as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn stop_on_failure(&self) -> bool {
        self.settings
            .as_ref()
            .and_then(|s| s.stop_on_failure)
            .unwrap_or(false)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.settings
            .as_ref()
            .and_then(|s| s.monitor)
            .unwrap_or(false)
    }

    pub fn resolve(&self, index: usize, case: &CaseConfig) -> Result<ResolvedCase> {
        let field = |name: &str| format!("cases[{}].{}", index, name);
        match case.op {
            Operation::Equal => Ok(ResolvedCase::Equal {
                left: self.operand(&field("left"), &case.left, &case.left_file)?,
                right: self.operand(&field("right"), &case.right, &case.right_file)?,
            }),
            Operation::IndexOf => {
                let sequence = match (&case.sequence, &case.sequence_file) {
                    (Some(items), None) => items.iter().map(Value::from).collect(),
                    (None, Some(file)) => match load_value(self.base_dir.join(file))? {
                        Value::Array(items) => items,
                        _ => {
                            return Err(CompareError::InvalidConfigValueError {
                                field: field("sequence_file"),
                                value: file.clone(),
                                reason: "File does not contain an array".to_string(),
                            })
                        }
                    },
                    _ => return Err(operand_conflict(&field("sequence"), case.sequence.is_some())),
                };
                let value = self.operand(&field("value"), &case.value, &case.value_file)?;
                Ok(ResolvedCase::IndexOf { sequence, value })
            }
        }
    }

    fn operand(
        &self,
        field: &str,
        inline: &Option<toml::Value>,
        file: &Option<String>,
    ) -> Result<Value> {
        match (inline, file) {
            (Some(value), None) => Ok(value.into()),
            (None, Some(file)) => load_value(self.base_dir.join(file)),
            _ => Err(operand_conflict(field, inline.is_some())),
        }
    }
}

fn operand_conflict(field: &str, both: bool) -> CompareError {
    if both {
        CompareError::InvalidConfigValueError {
            field: field.to_string(),
            value: "inline and file".to_string(),
            reason: "Give either an inline value or a file, not both".to_string(),
        }
    } else {
        CompareError::MissingConfigError {
            field: field.to_string(),
        }
    }
}

impl CaseConfig {
    fn validate_at(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("cases[{}].{}", index, name);
        validate_non_empty_string(&field("name"), &self.name)?;

        let (first, second) = match self.op {
            Operation::Equal => (
                ("left", self.left.is_some(), &self.left_file),
                ("right", self.right.is_some(), &self.right_file),
            ),
            Operation::IndexOf => (
                ("sequence", self.sequence.is_some(), &self.sequence_file),
                ("value", self.value.is_some(), &self.value_file),
            ),
        };
        for (name, has_inline, file) in [first, second] {
            if has_inline == file.is_some() {
                return Err(operand_conflict(&field(name), has_inline));
            }
            if let Some(file) = file {
                let file_field = field(&format!("{}_file", name));
                validate_path(&file_field, file)?;
                validate_file_extension(&file_field, file, &SUPPORTED_EXTENSIONS)?;
            }
        }

        match (&self.expect, self.op) {
            (None, _)
            | (Some(toml::Value::Boolean(_)), Operation::Equal)
            | (Some(toml::Value::Integer(_)), Operation::IndexOf) => Ok(()),
            (Some(other), op) => Err(CompareError::InvalidConfigValueError {
                field: field("expect"),
                value: other.to_string(),
                reason: match op {
                    Operation::Equal => "Expected a boolean".to_string(),
                    Operation::IndexOf => "Expected an integer index or -1".to_string(),
                },
            }),
        }
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;

        if self.cases.is_empty() {
            return Err(CompareError::ConfigValidationError {
                field: "cases".to_string(),
                message: "At least one case is required".to_string(),
            });
        }

        validate_unique_names("cases.name", self.cases.iter().map(|c| c.name.as_str()))?;

        for (index, case) in self.cases.iter().enumerate() {
            case.validate_at(index)?;
        }
        Ok(())
    }
}
