// Adapters layer: turning documents on disk into values.

pub mod csv_source;
pub mod json_source;
pub mod toml_source;

pub use csv_source::CsvSource;
pub use json_source::JsonSource;
pub use toml_source::TomlSource;

use crate::domain::model::Value;
use crate::domain::ports::ValueSource;
use crate::utils::error::{CompareError, Result};
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["json", "toml", "csv", "tsv"];

/// Picks the source for a file by its extension.
pub fn source_for_path(path: &Path) -> Result<Box<dyn ValueSource>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonSource)),
        Some("toml") => Ok(Box::new(TomlSource)),
        Some("csv") => Ok(Box::new(CsvSource::default())),
        Some("tsv") => Ok(Box::new(CsvSource::tsv())),
        _ => Err(CompareError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

pub fn load_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let source = source_for_path(path)?;
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(
        "Loaded {} ({} bytes) as {}",
        path.display(),
        content.len(),
        source.format_name()
    );
    source.parse_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_path() {
        assert_eq!(source_for_path(Path::new("a.JSON")).unwrap().format_name(), "json");
        assert_eq!(source_for_path(Path::new("a.tsv")).unwrap().format_name(), "tsv");
        assert!(matches!(
            source_for_path(Path::new("a.yaml")),
            Err(CompareError::UnsupportedFormat { .. })
        ));
        assert!(source_for_path(Path::new("no_extension")).is_err());
    }
}
